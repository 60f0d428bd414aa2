//! Header, mobile navigation and hero

use super::Tr;
use leptos::prelude::*;
use site_core::{Language, dom};

/// Sticky header: logo, desktop links, language switcher, mobile menu button
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="header-inner">
                <a href="#" class=dom::LOGO_CLASS>"Qiaoai Voice"</a>
                <nav class="desktop-nav">
                    <NavLinks />
                </nav>
                <LanguageSwitcher />
                <button
                    class=dom::MOBILE_MENU_BUTTON_CLASS
                    type="button"
                    aria-label="Menu"
                    aria-controls=dom::MOBILE_NAV
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <MobileNav />
        </header>
    }
}

/// One button per language; the bindings mark the current one active
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    view! {
        <div class="lang-switcher" role="group" aria-label="Language">
            {Language::ALL.into_iter().map(|lang| {
                view! {
                    <button class=dom::LANG_BUTTON_CLASS type="button" data-language=lang.code()>
                        {lang.label()}
                    </button>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// Collapsible navigation for narrow screens
#[component]
pub fn MobileNav() -> impl IntoView {
    view! {
        <nav id=dom::MOBILE_NAV class="mobile-nav">
            <NavLinks />
        </nav>
    }
}

#[component]
fn NavLinks() -> impl IntoView {
    view! {
        <a href="#services" class="nav-link"><Tr zh="服务" en="Services" jp="サービス" /></a>
        <a href="#contact" class="nav-link"><Tr zh="联系我们" en="Contact" jp="お問い合わせ" /></a>
    }
}

/// Landing hero and service summary
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="top" class="hero">
            <h1>
                <Tr zh="专业语音服务" en="Professional voice services" jp="プロの音声サービス" />
            </h1>
            <p class="hero-sub">
                <Tr
                    zh="配音、旁白与多语种录音，一站式完成。"
                    en="Dubbing, narration and multilingual recording in one place."
                    jp="吹き替え・ナレーション・多言語収録をワンストップで。"
                />
            </p>
            <a href="#contact" class="cta">
                <Tr zh="立即咨询" en="Get in touch" jp="お問い合わせ" />
            </a>
        </section>
        <section id="services" class="services">
            <div class="service-card">
                <h3><Tr zh="配音" en="Dubbing" jp="吹き替え" /></h3>
            </div>
            <div class="service-card">
                <h3><Tr zh="旁白" en="Narration" jp="ナレーション" /></h3>
            </div>
            <div class="service-card">
                <h3><Tr zh="多语种录音" en="Multilingual recording" jp="多言語収録" /></h3>
            </div>
        </section>
    }
}
