//! Global CSS styles for the portfolio.
//!
//! Dark glass panels over a purple gradient. Testimonial slot transitions
//! run for 800ms to line up with the rotator's exit and enter phases.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --bg: #0f0a1e;
  --bg-elevated: rgba(30, 22, 54, 0.65);
  --border: rgba(189, 147, 249, 0.18);

  /* Accent */
  --primary: #bd93f9;
  --primary-strong: #9d6bf2;
  --primary-glow: rgba(189, 147, 249, 0.35);
  --secondary: #ff79c6;

  /* Text */
  --text-primary: #f8fafc;
  --text-secondary: rgba(248, 250, 252, 0.8);
  --text-muted: rgba(248, 250, 252, 0.65);

  /* Semantic */
  --danger: #ff5c8a;
  --success: #50fa7b;

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Shape */
  --radius: 0.75rem;
  --radius-lg: 1.25rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slot: 800ms cubic-bezier(0.4, 0, 0.2, 1);
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
  font-size: var(--text-base);
  line-height: 1.6;
  color: var(--text-primary);
  background: var(--bg);
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  display: block;
  max-width: 100%;
}

/* === Page === */
.page {
  position: relative;
  min-height: 100vh;
  overflow-x: hidden;
}

.page-main {
  position: relative;
  z-index: 1;
}

.gradient-bg {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: none;
  background: radial-gradient(ellipse at top, #2a1b4d 0%, var(--bg) 60%);
}

.gradient-orb {
  position: absolute;
  border-radius: 50%;
  filter: blur(120px);
  opacity: 0.45;
}

.orb-primary {
  width: 480px;
  height: 480px;
  top: -120px;
  left: -80px;
  background: var(--primary-strong);
}

.orb-secondary {
  width: 420px;
  height: 420px;
  bottom: -140px;
  right: -100px;
  background: var(--secondary);
  opacity: 0.25;
}

.glass-panel {
  background: var(--bg-elevated);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  backdrop-filter: blur(12px);
}

.page-section {
  max-width: 1200px;
  margin: 0 auto;
  padding: 6rem 1.5rem;
}

/* === Section Heading === */
.section-heading {
  margin-bottom: 3rem;
}

.section-heading.centered {
  text-align: center;
}

.section-eyebrow {
  color: var(--primary);
  font-size: var(--text-sm);
  font-weight: 600;
  letter-spacing: 0.12em;
  text-transform: uppercase;
  margin-bottom: 0.5rem;
}

.section-title {
  font-size: var(--text-2xl);
  font-weight: 700;
}

.section-lead {
  color: var(--text-muted);
  max-width: 40rem;
  margin: 0.75rem auto 0;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.6rem 1.2rem;
  border-radius: var(--radius);
  border: 1px solid transparent;
  font: inherit;
  font-size: var(--text-sm);
  font-weight: 500;
  cursor: pointer;
  transition: background var(--transition-fast), border-color var(--transition-fast),
    color var(--transition-fast), opacity var(--transition-fast);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-default {
  background: var(--primary);
  color: var(--bg);
}

.btn-default:hover:not(:disabled) {
  background: var(--primary-strong);
}

.btn-outline {
  background: transparent;
  border-color: var(--primary);
  color: var(--primary);
}

.btn-outline:hover:not(:disabled) {
  background: var(--primary-glow);
}

.btn-ghost {
  background: transparent;
  color: var(--text-secondary);
}

.btn-ghost:hover:not(:disabled) {
  color: var(--text-primary);
  background: rgba(255, 255, 255, 0.06);
}

.btn-sm {
  padding: 0.4rem 0.8rem;
  font-size: var(--text-xs);
}

.btn-lg {
  padding: 0.8rem 1.6rem;
  font-size: var(--text-base);
}

.btn-icon {
  padding: 0.4rem;
  width: 2.25rem;
  height: 2.25rem;
}

/* === Badges === */
.badge-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
}

.badge {
  display: inline-block;
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  background: var(--primary-glow);
  color: var(--primary);
  font-size: var(--text-xs);
  font-weight: 500;
}

.badge-more {
  background: rgba(255, 255, 255, 0.08);
  color: var(--text-muted);
}

/* === Navbar === */
.navbar {
  position: sticky;
  top: 0;
  z-index: 50;
  background: rgba(15, 10, 30, 0.75);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--border);
}

.navbar-inner {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0.9rem 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.navbar-brand {
  font-size: var(--text-xl);
  font-weight: 700;
  background: linear-gradient(90deg, var(--primary), var(--secondary));
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
}

.navbar-links {
  display: flex;
  align-items: center;
  gap: 1.75rem;
}

.nav-link {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--primary);
}

.navbar-dropdown {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1rem 1.5rem 1.5rem;
  border-top: 1px solid var(--border);
}

.navbar-dropdown-action {
  width: 100%;
}

/* === Hero === */
.hero-section {
  min-height: calc(100vh - 4rem);
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 4rem 1.5rem;
  text-align: center;
}

.hero-greeting {
  color: var(--primary);
  font-size: var(--text-lg);
}

.hero-name {
  font-size: var(--text-3xl);
  font-weight: 800;
  line-height: 1.1;
  margin: 0.5rem 0 1rem;
}

.hero-role {
  font-size: var(--text-xl);
  font-weight: 500;
  color: var(--text-secondary);
  min-height: 2.4rem;
}

.hero-caret {
  color: var(--primary);
  margin-left: 2px;
  animation: caret-blink 1s step-end infinite;
}

@keyframes caret-blink {
  50% { opacity: 0; }
}

.hero-blurb {
  color: var(--text-muted);
  max-width: 36rem;
  margin: 1.5rem auto 2rem;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1rem;
}

.hero-socials,
.footer-socials {
  display: flex;
  justify-content: center;
  gap: 1rem;
  margin-top: 2rem;
}

.social-link {
  color: var(--text-muted);
  transition: color var(--transition-fast), transform var(--transition-fast);
}

.social-link:hover {
  color: var(--primary);
  transform: translateY(-2px);
}

.hero-scroll {
  margin-top: 3rem;
  color: var(--text-muted);
  animation: bounce 2s infinite;
}

@keyframes bounce {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(8px); }
}

/* === About === */
.about-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
  align-items: start;
}

.about-copy p {
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

.skills-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
}

.skill-card {
  padding: 1.5rem;
}

.skill-icon {
  color: var(--primary);
  margin-bottom: 0.75rem;
}

.skill-name {
  font-size: var(--text-lg);
  margin-bottom: 0.25rem;
}

.skill-description {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

/* === Projects === */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 1.5rem;
}

.project-card {
  display: flex;
  flex-direction: column;
  overflow: hidden;
  transition: transform var(--transition-normal), border-color var(--transition-normal);
}

.project-card:hover {
  transform: translateY(-4px);
  border-color: var(--primary);
}

.project-image img {
  width: 100%;
  height: 200px;
  object-fit: cover;
}

.project-body {
  flex: 1;
  padding: 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.project-title {
  font-size: var(--text-lg);
}

.project-description {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.project-actions {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 1.25rem 1.25rem;
}

.project-links {
  display: flex;
  gap: 0.25rem;
}

.project-dialog-image img {
  width: 100%;
  max-height: 280px;
  object-fit: cover;
  border-radius: var(--radius);
  margin-bottom: 1rem;
}

/* === Markdown === */
.markdown-content {
  margin: 1.25rem 0;
  color: var(--text-secondary);
}

.markdown-content h1,
.markdown-content h2,
.markdown-content h3 {
  color: var(--text-primary);
  margin: 1.25rem 0 0.5rem;
}

.markdown-content p {
  margin-bottom: 0.75rem;
}

.markdown-content ul,
.markdown-content ol {
  padding-left: 1.5rem;
  margin-bottom: 0.75rem;
}

.markdown-content code {
  background: rgba(255, 255, 255, 0.08);
  padding: 0.1rem 0.35rem;
  border-radius: 4px;
  font-size: 0.9em;
}

/* === Dialog === */
.dialog-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1.5rem;
  background: rgba(5, 2, 12, 0.75);
  backdrop-filter: blur(4px);
}

.dialog-panel {
  width: 100%;
  max-width: 720px;
  max-height: 90vh;
  overflow-y: auto;
  padding: 1.75rem;
  background: #1a1230;
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
}

.dialog-header {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  gap: 1rem;
  margin-bottom: 1.25rem;
}

.dialog-title {
  font-size: var(--text-xl);
}

.dialog-description {
  color: var(--text-muted);
  font-size: var(--text-sm);
  margin-top: 0.25rem;
}

.close-btn {
  font-size: var(--text-xl);
  line-height: 1;
}

/* === Testimonials === */
.testimonials-grid {
  display: grid;
  grid-template-columns: repeat(var(--testimonial-columns, 3), 1fr);
  gap: 1.5rem;
}

.testimonial-card {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1.75rem;
  opacity: 1;
  transform: translateY(0) scale(1);
  transition: opacity var(--transition-slot), transform var(--transition-slot);
}

.testimonial-card.exiting {
  opacity: 0;
  transform: translateY(-12px) scale(0.97);
}

.testimonial-card.entering {
  animation: slot-enter var(--transition-slot) both;
}

@keyframes slot-enter {
  from {
    opacity: 0;
    transform: translateY(12px) scale(0.97);
  }
  to {
    opacity: 1;
    transform: translateY(0) scale(1);
  }
}

.testimonial-quote {
  color: var(--primary);
  opacity: 0.7;
}

.testimonial-text {
  flex: 1;
  color: var(--text-secondary);
  font-style: italic;
}

.testimonial-author {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.testimonial-avatar {
  width: 3rem;
  height: 3rem;
  border-radius: 50%;
  object-fit: cover;
}

.testimonial-initials {
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--primary-glow);
  color: var(--primary);
  font-weight: 600;
}

.testimonial-name {
  font-weight: 600;
}

.testimonial-byline {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.testimonials-controls {
  display: flex;
  justify-content: center;
  margin-top: 2rem;
}

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: 1fr 1.5fr;
  gap: 2rem;
}

.contact-channels {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.contact-channel {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 1.25rem;
}

.contact-channel-icon {
  color: var(--primary);
}

.contact-channel-label {
  color: var(--text-muted);
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.08em;
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 1.75rem;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.input-label {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.input-field {
  width: 100%;
  padding: 0.65rem 0.85rem;
  background: rgba(255, 255, 255, 0.04);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  color: var(--text-primary);
  font: inherit;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--primary);
  box-shadow: 0 0 0 3px var(--primary-glow);
}

.input-field.invalid {
  border-color: var(--danger);
}

.input-field.textarea {
  resize: none;
}

.contact-submit {
  align-self: flex-start;
}

/* === Toast === */
.toast-region {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 200;
}

.toast {
  min-width: 280px;
  max-width: 380px;
  padding: 1rem 1.25rem;
  border-radius: var(--radius);
  background: #1a1230;
  border: 1px solid var(--border);
  box-shadow: 0 12px 32px rgba(0, 0, 0, 0.45);
  cursor: pointer;
  animation: toast-in var(--transition-normal) both;
}

.toast-success {
  border-left: 3px solid var(--success);
}

.toast-error {
  border-left: 3px solid var(--danger);
}

.toast-title {
  font-weight: 600;
}

.toast-description {
  color: var(--text-muted);
  font-size: var(--text-sm);
  margin-top: 0.25rem;
}

@keyframes toast-in {
  from {
    opacity: 0;
    transform: translateY(8px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

/* === Footer === */
.site-footer {
  position: relative;
  z-index: 1;
  border-top: 1px solid var(--border);
  padding: 2.5rem 1.5rem;
}

.footer-inner {
  max-width: 1200px;
  margin: 0 auto;
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: 1.5rem;
}

.footer-links {
  display: flex;
  gap: 1.25rem;
}

.footer-socials {
  margin-top: 0;
}

.footer-copyright {
  text-align: center;
  color: var(--text-muted);
  font-size: var(--text-sm);
  margin-top: 1.5rem;
}

/* === Narrow windows === */
@media (max-width: 1023px) {
  .about-grid,
  .contact-grid {
    grid-template-columns: 1fr;
  }
}

@media (max-width: 639px) {
  .page-section {
    padding: 4rem 1rem;
  }

  .hero-name {
    font-size: var(--text-2xl);
  }

  .skills-grid,
  .form-row {
    grid-template-columns: 1fr;
  }

  .footer-inner {
    flex-direction: column;
  }
}
"#;
