//! Confirm modal

use super::Tr;
use leptos::prelude::*;
use site_core::{FormField, dom};

/// Modal listing the form values before sending. Hidden until opened.
#[component]
pub fn ConfirmModal() -> impl IntoView {
    view! {
        <div id=dom::CONFIRM_MODAL class="confirm-modal" role="dialog" aria-modal="true" aria-hidden="true">
            <div id=dom::CONFIRM_BACKDROP class="confirm-backdrop"></div>
            <div class="confirm-content">
                <h3><Tr zh="请确认您的信息" en="Please confirm your details" jp="内容をご確認ください" /></h3>
                <dl class="confirm-rows">
                    {FormField::ALL.into_iter().map(|field| {
                        view! {
                            <dt><FieldLabel field=field /></dt>
                            <dd id=field.confirm_id() class="confirm-value">"-"</dd>
                        }
                    }).collect::<Vec<_>>()}
                </dl>
                <div class="confirm-actions">
                    <button id=dom::CONFIRM_CANCEL type="button" class="btn-secondary">
                        <Tr zh="返回修改" en="Edit" jp="修正する" />
                    </button>
                    <button id=dom::CONFIRM_OK type="button" class="btn-primary">
                        <Tr zh="确认发送" en="Send" jp="送信する" />
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn FieldLabel(field: FormField) -> impl IntoView {
    match field {
        FormField::Name => view! { <Tr zh="姓名" en="Name" jp="お名前" /> }.into_any(),
        FormField::Email => view! { <Tr zh="邮箱" en="Email" jp="メール" /> }.into_any(),
        FormField::Subject => view! { <Tr zh="主题" en="Subject" jp="件名" /> }.into_any(),
        FormField::Message => view! { <Tr zh="留言" en="Message" jp="メッセージ" /> }.into_any(),
    }
}
