//! CSS for the contact page.
//!
//! Language switching is pure CSS: every piece of copy is rendered three
//! times (`.t-zh`, `.t-en`, `.t-jp`) and the `<body>` marker class picks which
//! one is displayed. No marker means the primary language.

/// Complete stylesheet, inlined into `<head>`.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #0d0f14;
    --panel: #161a22;
    --text: #e6e8ee;
    --muted: #8a90a0;
    --accent: #4fd1c5;
    --radius: 10px;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: "PingFang SC", "Hiragino Sans", "Noto Sans CJK SC", system-ui, sans-serif;
    line-height: 1.6;
}

/* Language marker classes */
.t-en, .t-jp { display: none; }
body.lang-en .t-zh, body.lang-jp .t-zh { display: none; }
body.lang-en .t-en { display: inline; }
body.lang-jp .t-jp { display: inline; }

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 10;
    background: rgba(13, 15, 20, 0.92);
    border-bottom: 1px solid #222734;
}
.header-inner {
    display: flex;
    align-items: center;
    gap: 24px;
    max-width: 1100px;
    margin: 0 auto;
    padding: 14px 20px;
}
.logo { color: var(--text); font-weight: 700; text-decoration: none; }
.desktop-nav { display: flex; gap: 18px; margin-left: auto; }
.nav-link { color: var(--muted); text-decoration: none; }
.nav-link:hover { color: var(--text); }

.lang-switcher { display: flex; gap: 4px; }
.lang-btn {
    background: transparent;
    color: var(--muted);
    border: 1px solid #2a3040;
    border-radius: 6px;
    padding: 4px 10px;
    cursor: pointer;
}
.lang-btn.active { color: var(--bg); background: var(--accent); border-color: var(--accent); }

.mobile-menu-btn {
    display: none;
    flex-direction: column;
    gap: 4px;
    background: none;
    border: 0;
    cursor: pointer;
}
.mobile-menu-btn span { width: 22px; height: 2px; background: var(--text); transition: transform .2s; }
.mobile-menu-btn.active span:nth-child(1) { transform: translateY(6px) rotate(45deg); }
.mobile-menu-btn.active span:nth-child(2) { opacity: 0; }
.mobile-menu-btn.active span:nth-child(3) { transform: translateY(-6px) rotate(-45deg); }

.mobile-nav { display: none; flex-direction: column; padding: 0 20px 16px; }
.mobile-nav.active { display: flex; }

@media (max-width: 720px) {
    .desktop-nav { display: none; }
    .mobile-menu-btn { display: flex; margin-left: auto; }
}

/* Sections */
.hero, .services, .contact { max-width: 1100px; margin: 0 auto; padding: 72px 20px; }
.hero h1 { font-size: 2.4rem; margin: 0 0 12px; }
.hero-sub { color: var(--muted); }
.cta {
    display: inline-block;
    margin-top: 20px;
    padding: 10px 22px;
    border-radius: var(--radius);
    background: var(--accent);
    color: var(--bg);
    text-decoration: none;
}
.services { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px; }
.service-card { background: var(--panel); border-radius: var(--radius); padding: 20px; }

/* Contact form */
.contact-form { display: grid; gap: 14px; max-width: 560px; }
.field { display: grid; gap: 6px; }
.field-label { color: var(--muted); font-size: .9rem; }
.contact-form input, .contact-form textarea {
    background: var(--panel);
    color: var(--text);
    border: 1px solid #2a3040;
    border-radius: 8px;
    padding: 10px 12px;
    font: inherit;
}
.send-btn {
    justify-self: start;
    padding: 10px 26px;
    border: 0;
    border-radius: var(--radius);
    background: var(--accent);
    color: var(--bg);
    cursor: pointer;
}
.send-btn:disabled { opacity: .5; cursor: progress; }
.form-status { min-height: 1.6em; color: var(--accent); }

/* Confirm modal */
.confirm-modal { display: none; position: fixed; inset: 0; z-index: 50; }
.confirm-modal.active { display: block; }
.confirm-backdrop { position: absolute; inset: 0; background: rgba(0, 0, 0, .6); }
.confirm-content {
    position: relative;
    max-width: 520px;
    margin: 10vh auto 0;
    background: var(--panel);
    border-radius: var(--radius);
    padding: 24px;
}
.confirm-rows { display: grid; grid-template-columns: max-content 1fr; gap: 8px 16px; }
.confirm-rows dt { color: var(--muted); }
.confirm-value { margin: 0; white-space: pre-wrap; word-break: break-word; }
.confirm-actions { display: flex; justify-content: flex-end; gap: 10px; margin-top: 20px; }
.btn-primary, .btn-secondary { padding: 8px 18px; border-radius: 8px; cursor: pointer; }
.btn-primary { background: var(--accent); color: var(--bg); border: 0; }
.btn-secondary { background: transparent; color: var(--text); border: 1px solid #2a3040; }

.site-footer { text-align: center; color: var(--muted); padding: 32px 20px; }
"#;
