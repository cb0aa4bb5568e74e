//! Global CSS styles for the portfolio.
//!
//! Dark terminal look: deep navy background, cyan accents, per-card accent
//! colors passed in through the `--accent` custom property.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg: #0b0f19;
  --bg-raised: #111827;
  --bg-overlay: rgba(5, 8, 15, 0.85);
  --border: #1f2937;

  /* Accents */
  --cyan: #00d4ff;
  --cyan-glow: rgba(0, 212, 255, 0.25);
  --green: #00ff7f;
  --red: #ff6b6b;
  --yellow: #ffd93d;

  /* Text */
  --text-primary: #e5e7eb;
  --text-secondary: rgba(229, 231, 235, 0.7);
  --text-muted: rgba(229, 231, 235, 0.45);

  /* Typography */
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
  --font-sans: 'Inter', system-ui, -apple-system, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-morph: 300ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
  min-height: 100vh;
}

a {
  color: var(--cyan);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

/* === Navigation === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  gap: 2rem;
  padding: 1rem 2rem;
  background: rgba(11, 15, 25, 0.95);
  border-bottom: 1px solid var(--border);
}

.nav-title {
  font-family: var(--font-mono);
  font-weight: 700;
  color: var(--cyan);
  letter-spacing: 0.05em;
}

.nav-links {
  display: flex;
  gap: 1.25rem;
  flex: 1;
  flex-wrap: wrap;
}

.nav-link, .nav-admin {
  font-family: var(--font-mono);
  font-size: 0.875rem;
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.nav-link:hover, .nav-admin:hover {
  color: var(--cyan);
  text-decoration: none;
}

.nav-link.active, .nav-admin.active {
  color: var(--cyan);
  border-bottom: 1px solid var(--cyan);
}

/* === Pages === */
.page {
  max-width: 1100px;
  margin: 0 auto;
  padding: 2.5rem 2rem 4rem;
}

.page-header {
  margin-bottom: 2rem;
}

.page-title {
  font-family: var(--font-mono);
  font-size: 2rem;
  color: var(--cyan);
}

.page-subtitle {
  color: var(--text-secondary);
  font-family: var(--font-mono);
  font-size: 0.9rem;
}

.page-hint, .empty-state {
  margin-top: 2rem;
  color: var(--text-muted);
  font-size: 0.85rem;
  text-align: center;
}

.page-alt-link {
  display: inline-block;
  margin-top: 1.5rem;
  font-family: var(--font-mono);
  font-size: 0.85rem;
}

.section-header {
  font-family: var(--font-mono);
  font-size: 1.25rem;
  color: var(--cyan);
  margin-bottom: 1rem;
}

.body-text {
  color: var(--text-secondary);
}

/* === Home === */
.hero {
  text-align: center;
  margin: 3rem 0;
}

.hero-name {
  font-family: var(--font-mono);
  font-size: 3rem;
  color: var(--cyan);
}

.hero-headline {
  color: var(--text-secondary);
  font-size: 1.1rem;
}

.hub-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1.25rem;
}

.hub-tile {
  display: block;
  padding: 1.5rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 12px;
  transition: border-color var(--transition-fast), transform var(--transition-fast);
}

.hub-tile:hover {
  border-color: var(--cyan);
  transform: translateY(-2px);
  text-decoration: none;
}

.hub-title {
  font-family: var(--font-mono);
  color: var(--text-primary);
  font-size: 1.1rem;
}

.hub-blurb {
  color: var(--text-muted);
  font-size: 0.85rem;
}

/* === Filter Pills === */
.filter-pills {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 1.5rem;
}

.pill {
  padding: 0.35rem 0.9rem;
  border: 1px solid var(--border);
  border-radius: 999px;
  background: transparent;
  font-family: var(--font-mono);
  font-size: 0.8rem;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.pill.selected {
  font-weight: 700;
}

/* === Cards === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.25rem;
  align-items: start;
}

.morph-card, .popup-card {
  --accent: var(--cyan);
  padding: 1.25rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-top: 3px solid var(--accent);
  border-radius: 12px;
  cursor: pointer;
  transition: all var(--transition-morph);
}

.morph-card:hover, .popup-card:hover,
.morph-card:focus-visible, .popup-card:focus-visible {
  border-color: var(--accent);
  box-shadow: 0 0 18px var(--cyan-glow);
  outline: none;
}

.morph-card.expanded {
  grid-column: 1 / -1;
  border-color: var(--accent);
  box-shadow: 0 0 24px var(--cyan-glow);
}

.morph-card-header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.card-icon {
  font-size: 1.5rem;
}

.card-title {
  flex: 1;
  font-family: var(--font-mono);
  font-size: 1.05rem;
  color: var(--accent, var(--text-primary));
}

.card-toggle {
  font-family: var(--font-mono);
  color: var(--text-muted);
}

.card-summary {
  margin-top: 0.5rem;
  color: var(--text-secondary);
  font-size: 0.9rem;
}

.card-detail {
  margin-top: 1rem;
  padding-top: 1rem;
  border-top: 1px dashed var(--border);
  animation: morph-in var(--transition-morph);
}

@keyframes morph-in {
  from { opacity: 0; transform: translateY(-4px); }
  to { opacity: 1; transform: translateY(0); }
}

.card-subtitle {
  font-style: italic;
  color: var(--text-secondary);
  margin-bottom: 0.5rem;
}

.card-body-list {
  padding-left: 1.25rem;
  color: var(--text-secondary);
}

.card-body-list li::marker {
  color: var(--accent);
}

.card-links {
  display: flex;
  gap: 1rem;
  margin-top: 1rem;
}

.card-link {
  font-family: var(--font-mono);
  font-size: 0.85rem;
  color: var(--accent);
}

/* === Tags === */
.tag-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
  margin-top: 0.75rem;
  list-style: none;
}

.tag {
  padding: 0.15rem 0.6rem;
  border: 1px solid var(--border);
  border-radius: 6px;
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--text-secondary);
}

/* === Popup Overlay === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
  background: var(--bg-overlay);
}

.popup-panel {
  width: min(720px, 100%);
  max-height: 85vh;
  overflow-y: auto;
  padding: 2rem;
  background: var(--bg-raised);
  border: 1px solid var(--accent);
  border-radius: 16px;
  box-shadow: 0 0 40px var(--cyan-glow);
}

.popup-header {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.icon-btn {
  background: transparent;
  border: none;
  color: var(--text-secondary);
  font-size: 1.5rem;
  cursor: pointer;
}

.icon-btn:hover {
  color: var(--red);
}

/* === Education & Contact === */
.timeline {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  margin-bottom: 3rem;
}

.timeline-entry {
  padding: 1.25rem 1.5rem;
  border-left: 3px solid var(--cyan);
  background: var(--bg-raised);
  border-radius: 0 12px 12px 0;
}

.timeline-header {
  display: flex;
  justify-content: space-between;
  gap: 1rem;
}

.timeline-title {
  font-size: 1.1rem;
}

.timeline-duration, .timeline-institution, .cert-issuer, .cert-date {
  font-family: var(--font-mono);
  font-size: 0.8rem;
  color: var(--text-muted);
}

.cert-list {
  list-style: none;
  display: grid;
  gap: 0.75rem;
}

.cert-item {
  display: grid;
  grid-template-columns: 1fr auto auto;
  gap: 1rem;
  padding: 0.75rem 1rem;
  border: 1px solid var(--border);
  border-radius: 8px;
}

.channel-list {
  display: grid;
  gap: 1rem;
  margin-bottom: 2.5rem;
}

.channel {
  display: grid;
  grid-template-columns: 2rem 10rem 1fr;
  align-items: center;
  padding: 1rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 10px;
}

.channel-label {
  font-family: var(--font-mono);
  font-size: 0.8rem;
  color: var(--text-muted);
}

.social-links {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 1rem;
}

.social-links .section-header {
  width: 100%;
}

.social-link {
  display: inline-flex;
  gap: 0.5rem;
  padding: 0.5rem 1rem;
  border: 1px solid var(--border);
  border-radius: 8px;
}

/* === Forms === */
.login-form {
  max-width: 380px;
  margin: 3rem auto;
  padding: 2rem;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 16px;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.input-label {
  font-family: var(--font-mono);
  font-size: 0.8rem;
  color: var(--text-secondary);
}

.input-required {
  color: var(--red);
}

.input-field {
  padding: 0.6rem 0.8rem;
  background: transparent;
  border: 1px solid var(--border);
  border-radius: 8px;
  color: var(--cyan);
  font-family: var(--font-mono);
}

.input-field:focus {
  outline: none;
  border-color: var(--cyan);
  box-shadow: 0 0 10px var(--cyan-glow);
}

.error-text {
  color: var(--red);
  font-size: 0.85rem;
}

/* === Buttons === */
.btn-primary, .btn-ghost, .btn-success, .btn-danger {
  padding: 0.5rem 1.1rem;
  border-radius: 8px;
  font-family: var(--font-mono);
  font-size: 0.85rem;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-primary {
  background: var(--cyan);
  border: 1px solid var(--cyan);
  color: var(--bg);
  font-weight: 700;
}

.btn-ghost {
  background: transparent;
  border: 1px solid var(--border);
  color: var(--text-secondary);
}

.btn-success {
  background: transparent;
  border: 1px solid var(--green);
  color: var(--green);
}

.btn-danger {
  background: transparent;
  border: 1px solid var(--red);
  color: var(--red);
}

button:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.wide {
  width: 100%;
}

/* === Admin === */
.admin-header {
  display: flex;
  justify-content: space-between;
  align-items: flex-end;
  margin-bottom: 1.5rem;
}

.admin-actions {
  display: flex;
  gap: 0.75rem;
}

.banner {
  padding: 0.75rem 1rem;
  margin-bottom: 1.25rem;
  border-radius: 8px;
  font-size: 0.9rem;
}

.banner-success {
  border: 1px solid var(--green);
  color: var(--green);
  background: rgba(0, 255, 127, 0.08);
}

.banner-error {
  border: 1px solid var(--red);
  color: var(--red);
  background: rgba(255, 107, 107, 0.08);
}

.message-list {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.message-card {
  padding: 1.25rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 12px;
}

.message-card.unread {
  border-left: 3px solid var(--cyan);
}

.message-card.read {
  opacity: 0.8;
}

.message-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.message-subject {
  font-size: 1.05rem;
}

.badge {
  padding: 0.1rem 0.6rem;
  border-radius: 999px;
  font-family: var(--font-mono);
  font-size: 0.7rem;
}

.badge-new {
  background: var(--cyan);
  color: var(--bg);
}

.badge-read {
  border: 1px solid var(--green);
  color: var(--green);
}

.message-meta {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  margin: 0.35rem 0 0.75rem;
  font-size: 0.8rem;
  color: var(--text-muted);
}

.message-body {
  white-space: pre-wrap;
  color: var(--text-secondary);
}

.message-actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.75rem;
  margin-top: 1rem;
}

.admin-footer {
  margin-top: 3rem;
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--text-muted);
  text-align: center;
}

/* === Loading === */
.verifying {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  margin: 4rem 0;
  color: var(--text-muted);
}

.spinner {
  width: 32px;
  height: 32px;
  border: 3px solid var(--border);
  border-top-color: var(--cyan);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}
"#;
