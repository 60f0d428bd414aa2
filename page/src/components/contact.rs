//! Contact form section

use super::Tr;
use leptos::prelude::*;
use site_core::{SiteConfig, dom};

/// Contact form posting natively to the configured mail relay.
///
/// `novalidate` is deliberately absent: the bindings rely on the browser's
/// constraint validation before showing the confirm modal.
#[component]
pub fn ContactSection(config: SiteConfig) -> impl IntoView {
    let redirect = config.redirect_url.clone().map(|url| {
        view! { <input type="hidden" name="_next" value=url /> }
    });

    view! {
        <section id="contact" class="contact">
            <h2><Tr zh="联系我们" en="Contact us" jp="お問い合わせ" /></h2>
            <form id=dom::CONTACT_FORM class="contact-form" method="POST" action=config.form_action.clone()>
                <label class="field">
                    <span class="field-label"><Tr zh="姓名" en="Name" jp="お名前" /></span>
                    <input id=dom::FIELD_NAME name="name" type="text" autocomplete="name" required=true />
                </label>
                <label class="field">
                    <span class="field-label"><Tr zh="邮箱" en="Email" jp="メール" /></span>
                    <input id=dom::FIELD_EMAIL name="email" type="email" autocomplete="email" required=true />
                </label>
                <label class="field">
                    <span class="field-label"><Tr zh="主题" en="Subject" jp="件名" /></span>
                    <input id=dom::FIELD_SUBJECT name="subject" type="text" required=true />
                </label>
                <label class="field">
                    <span class="field-label"><Tr zh="留言" en="Message" jp="メッセージ" /></span>
                    <textarea id=dom::FIELD_MESSAGE name="message" rows="6" required=true></textarea>
                </label>
                <input id=dom::REPLY_TO type="hidden" name="_replyto" value="" />
                <input type="hidden" name="_captcha" value="false" />
                {redirect}
                <button id=dom::SEND_BUTTON class="send-btn" type="submit">
                    <Tr zh="发送" en="Send" jp="送信" />
                </button>
                <p id=dom::FORM_STATUS class="form-status" aria-live="polite"></p>
            </form>
        </section>
    }
}
