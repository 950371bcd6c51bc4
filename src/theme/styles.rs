//! Global CSS styles for the portfolio site.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --background: #ffffff;
  --surface: #f8f9fa;
  --border: #e1e4e8;

  /* TEXT */
  --text-primary: #2c3e50;
  --text-secondary: #5d6d7e;

  /* ACCENT */
  --accent: #3498db;
  --accent-dark: #2980b9;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Roboto, sans-serif;

  /* Layout */
  --header-height: 70px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  color: var(--text-primary);
  background: var(--background);
  line-height: 1.6;
}

a {
  color: var(--accent);
  text-decoration: none;
}

/* === Page Loader === */
.page-loader {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--background);
  z-index: 2000;
  transition: opacity var(--transition-normal), visibility var(--transition-normal);
}

.page-loader.hidden {
  opacity: 0;
  visibility: hidden;
}

.spinner {
  width: 48px;
  height: 48px;
  border: 4px solid var(--border);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Header === */
.site-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--header-height);
  background: rgba(255, 255, 255, 0.95);
  box-shadow: 0 2px 10px rgba(0, 0, 0, 0.08);
  z-index: 1000;
}

.navbar {
  max-width: 1100px;
  height: 100%;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.logo {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--text-primary);
}

.nav-links {
  display: flex;
  gap: 1.5rem;
  list-style: none;
}

.nav-link {
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  color: var(--accent);
}

.icon-btn {
  background: none;
  border: none;
  cursor: pointer;
  font-size: 1.25rem;
  color: var(--text-primary);
}

.hamburger {
  display: none;
}

@media (max-width: 768px) {
  .hamburger {
    display: block;
  }

  .nav-links {
    position: fixed;
    top: var(--header-height);
    left: -100%;
    width: 100%;
    height: calc(100vh - var(--header-height));
    flex-direction: column;
    align-items: center;
    padding-top: 2rem;
    background: var(--background);
    transition: left var(--transition-normal);
  }

  .nav-links.active {
    left: 0;
  }
}

/* === Sections === */
.section {
  max-width: 1100px;
  margin: 0 auto;
  padding: 6rem 1.5rem 4rem;
}

.section-title {
  font-size: 2rem;
  margin-bottom: 2rem;
  text-align: center;
}

.hero {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  gap: 1rem;
}

.hero h1 {
  font-size: 3rem;
}

.tagline {
  color: var(--text-secondary);
  font-size: 1.25rem;
}

.about-content {
  display: flex;
  gap: 2rem;
  align-items: center;
}

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.75rem 1.5rem;
  border-radius: 4px;
  border: 2px solid var(--accent);
  font-size: 1rem;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn-primary {
  background: var(--accent);
  color: #fff;
}

.btn-primary:hover:not(:disabled) {
  background: var(--accent-dark);
  border-color: var(--accent-dark);
}

.btn-primary:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-secondary {
  background: transparent;
  color: var(--accent);
}

.btn-link {
  background: none;
  border: none;
  color: var(--accent);
  cursor: pointer;
  font-size: 0.875rem;
  padding: 0;
}

/* === Forms === */
.form-group {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
  margin-bottom: 1rem;
}

.form-control {
  padding: 0.65rem 0.85rem;
  border: 1px solid var(--border);
  border-radius: 4px;
  font: inherit;
}

.form-control:focus {
  outline: none;
  border-color: var(--accent);
}

/* === Skills === */
.skill {
  margin-bottom: 1.25rem;
}

.skill-info {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.35rem;
}

.skill-bar {
  height: 10px;
  background: var(--border);
  border-radius: 5px;
  overflow: hidden;
}

.skill-progress {
  height: 100%;
  background: var(--accent);
  transition: width 1.5s ease;
}

/* === Portfolio === */
.portfolio-filters {
  display: flex;
  justify-content: center;
  gap: 0.75rem;
  margin-bottom: 2rem;
}

.filter-btn {
  padding: 0.5rem 1.25rem;
  border: 1px solid var(--border);
  border-radius: 20px;
  background: transparent;
  cursor: pointer;
}

.filter-btn.active {
  background: var(--accent);
  border-color: var(--accent);
  color: #fff;
}

.portfolio-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 1.5rem;
}

.portfolio-item {
  border-radius: 8px;
  overflow: hidden;
  background: var(--surface);
  transition: opacity var(--transition-normal), transform var(--transition-normal);
}

.portfolio-item.shown {
  opacity: 1;
  transform: scale(1);
}

.portfolio-item.fading-in {
  opacity: 0;
  transform: scale(0.8);
}

.portfolio-item.fading-out {
  opacity: 0;
  transform: scale(0.8);
}

.portfolio-item.hidden {
  display: none;
}

.portfolio-info {
  padding: 1rem;
}

.portfolio-placeholder {
  height: 180px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 3rem;
  color: var(--text-secondary);
}

img.lazy {
  opacity: 0;
}

img.loaded {
  opacity: 1;
  transition: opacity var(--transition-normal);
}

/* === Gallery === */
.gallery-main {
  position: relative;
  height: 240px;
  margin: 1.5rem 0 1rem;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 5rem;
  background: var(--surface);
  border-radius: 8px;
}

.gallery-overlay {
  position: absolute;
  bottom: 1rem;
  right: 1rem;
  padding: 0.25rem 0.75rem;
  font-size: 0.875rem;
  color: #fff;
  background: rgba(0, 0, 0, 0.6);
  border-radius: 4px;
}

.gallery-thumbnails {
  display: flex;
  gap: 0.75rem;
}

.thumbnail {
  padding: 0.75rem 1rem;
  border: 2px solid transparent;
  border-radius: 4px;
  background: var(--surface);
}

.thumbnail.active {
  border-color: var(--accent);
}

/* === Comments === */
.comments-section {
  margin-top: 3rem;
}

.comment {
  display: flex;
  gap: 1rem;
  padding: 1rem 0;
  border-bottom: 1px solid var(--border);
}

.comment.reply {
  margin-left: 3rem;
}

.comment-avatar {
  width: 40px;
  height: 40px;
  flex-shrink: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: var(--surface);
}

.comment-header {
  display: flex;
  gap: 0.75rem;
  align-items: baseline;
}

.comment-date {
  color: var(--text-secondary);
  font-size: 0.875rem;
}

.reply-form {
  margin: 1rem 0 1rem 3rem;
  padding: 1.25rem;
  background: var(--surface);
  border-radius: 8px;
}

.reply-form h4 {
  margin-bottom: 1rem;
}

.reply-actions {
  display: flex;
  gap: 0.75rem;
}

/* === Toasts === */
.notification {
  position: fixed;
  top: 20px;
  right: 20px;
  padding: 15px 20px;
  border-radius: 5px;
  color: #fff;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
  z-index: 1500;
  transition: transform var(--transition-normal);
  max-width: 350px;
}

.notification-content {
  display: flex;
  align-items: center;
  gap: 10px;
}

/* === Alert Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.45);
  z-index: 1800;
}

.modal-card {
  min-width: 280px;
  padding: 1.5rem;
  background: var(--background);
  border-radius: 8px;
  box-shadow: 0 8px 30px rgba(0, 0, 0, 0.2);
}

.modal-message {
  margin-bottom: 1.25rem;
}

.modal-actions {
  display: flex;
  justify-content: flex-end;
}

/* === Footer === */
.site-footer {
  padding: 2rem;
  text-align: center;
  color: var(--text-secondary);
  border-top: 1px solid var(--border);
}
"#;
