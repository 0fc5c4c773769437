//! Global CSS styles for the hero panel.
//!
//! Slate background, cyan accents, lamp glow.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SLATE (Backgrounds) */
  --slate-950: #020617;
  --slate-900: #0f172a;
  --slate-800: #1e293b;
  --slate-700: #334155;

  /* CYAN (Accents, Links, Caret) */
  --cyan: #22d3ee;
  --cyan-deep: #0891b2;
  --cyan-glow: rgba(34, 211, 238, 0.35);

  /* TEXT */
  --text-primary: #e2e8f0;
  --text-secondary: #94a3b8;
  --text-muted: #64748b;

  /* SEMANTIC */
  --danger: #f87171;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
}

* { box-sizing: border-box; }

html, body {
  margin: 0;
  padding: 0;
  background: var(--slate-950);
  color: var(--text-primary);
  font-family: var(--font-sans);
  min-height: 100vh;
}

.landing {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

/* === Hero === */
.hero {
  position: relative;
  flex: 1;
}

.hero-greeting {
  margin: 0.5rem 0 0;
  font-size: 1.5rem;
  font-weight: 500;
  color: var(--text-secondary);
  text-align: center;
}

.hero-name {
  margin: 0;
  font-size: 4.5rem;
  font-weight: 700;
  letter-spacing: -0.02em;
  text-align: center;
  background: linear-gradient(to bottom right, #cbd5e1, #64748b);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-role {
  margin: 0.25rem 0 0;
  font-size: 1.9rem;
  font-weight: 500;
  color: var(--text-secondary);
  text-align: center;
  min-height: 2.4rem;
}

.hero-typed {
  color: var(--cyan);
  font-weight: 600;
}

.caret { margin-left: 1px; }
.caret-typing,
.caret-deleting { animation: caret-pulse 1s ease-in-out infinite; }
.caret-paused { opacity: 0.4; }

@keyframes caret-pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.2; }
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  justify-content: center;
  margin-top: 2rem;
}

.hero-notice {
  margin: 1rem 0 0;
  text-align: center;
  font-size: 0.85rem;
  color: var(--text-secondary);
}

.hero-social {
  display: flex;
  justify-content: center;
  gap: 1.5rem;
  margin-top: 2rem;
}

.social-badge {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 3rem;
  height: 3rem;
  border-radius: 9999px;
  background: rgba(30, 41, 59, 0.5);
  border: 1px solid rgba(51, 65, 85, 0.5);
  color: var(--text-primary);
  font-weight: 600;
  text-decoration: none;
  transition: transform 300ms, color 300ms, box-shadow 300ms;
}

.social-badge:hover {
  color: var(--cyan);
  transform: translateY(-4px);
  box-shadow: 0 8px 20px rgba(0, 0, 0, 0.4);
}

.hero-location {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 1.5rem;
  color: var(--text-secondary);
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border-radius: 8px;
  font-family: inherit;
  font-weight: 600;
  cursor: pointer;
  text-decoration: none;
  transition: background 200ms, color 200ms;
}

.btn:disabled { opacity: 0.5; cursor: not-allowed; }

.btn-md { padding: 0.5rem 1rem; font-size: 0.95rem; }
.btn-lg { padding: 0.8rem 1.6rem; font-size: 1.05rem; }

.btn-primary {
  background: var(--cyan-deep);
  border: 1px solid var(--cyan-deep);
  color: #ffffff;
}
.btn-primary:hover { background: #0e7490; }

.btn-outline {
  background: transparent;
  border: 1px solid var(--cyan);
  color: var(--cyan);
}
.btn-outline:hover { background: var(--cyan); color: var(--slate-950); }

.icon-btn {
  background: transparent;
  border: none;
  color: var(--text-secondary);
  font-size: 1.5rem;
  cursor: pointer;
}
.icon-btn:hover { color: var(--cyan); }

/* === Lamp Backdrop === */
.lamp-container {
  position: relative;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  background: var(--slate-950);
}

.lamp-beam {
  position: absolute;
  top: 0;
  left: 50%;
  width: 60rem;
  height: 22rem;
  transform: translateX(-50%);
  pointer-events: none;
}

.lamp-cone {
  position: absolute;
  top: 0;
  width: 30rem;
  height: 14rem;
}

.lamp-cone-left {
  right: 50%;
  background: conic-gradient(from 70deg at center top, var(--lamp-color), transparent, transparent);
}

.lamp-cone-right {
  left: 50%;
  background: conic-gradient(from 290deg at center top, transparent, transparent, var(--lamp-color));
}

.lamp-bar {
  position: absolute;
  top: 14rem;
  left: 50%;
  width: 30rem;
  height: 2px;
  transform: translateX(-50%);
  background: var(--lamp-color);
}

.lamp-glow {
  position: absolute;
  top: 11rem;
  left: 50%;
  width: 28rem;
  height: 9rem;
  transform: translateX(-50%);
  border-radius: 9999px;
  background: var(--lamp-color);
  filter: blur(80px);
  opacity: 0.5;
}

.lamp-content {
  position: relative;
  z-index: 1;
  margin-top: 14rem;
  padding: 0 1.25rem;
}

/* === Contact Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.5);
  backdrop-filter: blur(4px);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 50;
  animation: fade-in 200ms ease-out;
}

.contact-modal {
  background: rgba(15, 23, 42, 0.95);
  border: 1px solid rgba(51, 65, 85, 0.5);
  border-radius: 12px;
  padding: 1.5rem;
  max-width: 28rem;
  width: 100%;
  margin: 0 1rem;
  box-shadow: 0 20px 40px rgba(0, 0, 0, 0.5);
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.modal-title {
  margin: 0;
  font-size: 1.5rem;
  color: var(--text-primary);
}

.modal-description {
  margin: 0.25rem 0 1.5rem;
  color: var(--text-secondary);
}

.contact-rows {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.contact-row {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem;
  background: rgba(30, 41, 59, 0.5);
  border-radius: 8px;
}

.contact-icon { color: var(--cyan); font-size: 1.25rem; }
.contact-label { margin: 0; font-size: 0.8rem; color: var(--text-secondary); }
.contact-value { margin: 0; color: var(--text-primary); }
a.contact-value { text-decoration: none; }
a.contact-value:hover { color: var(--cyan); }

.contact-links {
  display: flex;
  gap: 0.75rem;
  padding-top: 1rem;
}

.contact-link { flex: 1; }

.modal-close {
  width: 100%;
  margin-top: 1.5rem;
}

.error-text {
  color: var(--danger);
  text-align: center;
  margin-top: 4rem;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;
