//! View rendering for the registration component.
//!
//! Right-to-left page with the personal details grid, the attachments panel
//! and the submit button. Texts stay in Arabic, the organisation's language.
//! Inputs are not bound to `value`; the browser keeps what the user typed
//! and every change is mirrored into the form state.

use common::model::attachment::{AttachmentFile, AttachmentKind};
use common::model::governorate::Governorate;
use common::model::member::NATIONAL_ID_MAX_LEN;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{field_change, file_change};
use super::messages::Msg;
use super::state::RegistrationComponent;

const INPUT_CLASS: &str = "w-full p-3.5 bg-gray-50 border border-gray-200 rounded-xl focus:ring-2 focus:ring-blue-900 outline-none transition";
const LABEL_CLASS: &str = "block text-sm font-bold text-gray-700 mb-2";

pub fn view(component: &RegistrationComponent, ctx: &Context<RegistrationComponent>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="min-h-screen bg-slate-50 py-12 px-4" dir="rtl">
            <div class="max-w-3xl mx-auto bg-white shadow-2xl rounded-3xl overflow-hidden border border-gray-100">
                <div class="bg-blue-900 h-3 w-full"></div>
                <div class="p-8 md:p-12">
                    { build_header() }
                    <form {onsubmit} class="space-y-6">
                        { build_details(component, link) }
                        { build_attachments(component, link) }
                        { build_submit_button(component) }
                    </form>
                </div>
            </div>
        </div>
    }
}

fn build_header() -> Html {
    html! {
        <div class="text-center mb-10">
            <h1 class="text-3xl font-extrabold text-blue-900 mb-3">{"الاتحاد الوطني للقيادات الشبابية"}</h1>
            <div class="h-1 w-20 bg-yellow-500 mx-auto rounded-full mb-3"></div>
            <p class="text-gray-600 font-medium">{"استمارة الانضمام للعضوية 2026"}</p>
        </div>
    }
}

fn build_details(component: &RegistrationComponent, link: &Scope<RegistrationComponent>) -> Html {
    let oninput = link.batch_callback(|e: InputEvent| field_change(&e));
    let onchange = link.batch_callback(|e: Event| field_change(&e));
    let selected = component.form.record.governorate;

    html! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            <div class="md:col-span-2">
                <label class={LABEL_CLASS}>{"الاسم رباعي (كما هو في البطاقة)"}</label>
                <input name="full_name" type="text" oninput={oninput.clone()} class={INPUT_CLASS}
                    required={true} placeholder="أدخل اسمك الكامل" />
            </div>

            <div>
                <label class={LABEL_CLASS}>{"الرقم القومي (14 رقم)"}</label>
                <input name="national_id" type="text" maxlength={NATIONAL_ID_MAX_LEN.to_string()}
                    oninput={oninput.clone()} class={INPUT_CLASS} required={true} placeholder="00000000000000" />
            </div>

            <div>
                <label class={LABEL_CLASS}>{"رقم الموبايل (واتساب)"}</label>
                <input name="phone" type="tel" oninput={oninput.clone()} class={INPUT_CLASS}
                    required={true} placeholder="01xxxxxxxxx" />
            </div>

            <div>
                <label class={LABEL_CLASS}>{"البريد الإلكتروني"}</label>
                <input name="email" type="email" {oninput} class={INPUT_CLASS}
                    required={true} placeholder="example@mail.com" />
            </div>

            <div>
                <label class={LABEL_CLASS}>{"المحافظة"}</label>
                <select name="governorate" {onchange} class={classes!(INPUT_CLASS, "appearance-none")}>
                    { for Governorate::ALL.iter().map(|g| html! {
                        <option value={g.label()} selected={*g == selected}>{ g.label() }</option>
                    }) }
                </select>
            </div>
        </div>
    }
}

fn build_attachments(
    component: &RegistrationComponent,
    link: &Scope<RegistrationComponent>,
) -> Html {
    html! {
        <div class="bg-blue-50 p-6 rounded-2xl border border-blue-100">
            <h3 class="font-bold text-blue-900 mb-4 flex items-center gap-2">
                <span>{"📁"}</span>{" المرفقات المطلوبة (صور واضحة)"}
            </h3>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                { file_picker(component, link, AttachmentKind::PersonalPhoto) }
                { file_picker(component, link, AttachmentKind::IdCard) }
            </div>
        </div>
    }
}

fn file_picker(
    component: &RegistrationComponent,
    link: &Scope<RegistrationComponent>,
    kind: AttachmentKind,
) -> Html {
    let (label, prompt) = match kind {
        AttachmentKind::PersonalPhoto => ("الصورة الشخصية", "إرفاق صورة شخصية"),
        AttachmentKind::IdCard => ("صورة البطاقة", "إرفاق صورة البطاقة"),
    };
    let status = component
        .form
        .files
        .get(kind)
        .map(|file| format!("✅ {}", file.file_name()))
        .unwrap_or_else(|| prompt.to_string());
    let onchange = link.batch_callback(|e: Event| file_change(&e));

    html! {
        <div class="flex flex-col">
            <label class="text-xs font-bold text-gray-500 mb-2 mr-1">{ label }</label>
            <div class="relative border-2 border-dashed border-blue-200 bg-white p-4 rounded-xl hover:border-blue-400 transition text-center cursor-pointer">
                <input name={kind.input_name()} type="file" accept="image/*" {onchange}
                    class="absolute inset-0 w-full h-full opacity-0 cursor-pointer" required={true} />
                <span class="text-sm text-blue-600 font-medium">{ status }</span>
            </div>
        </div>
    }
}

const SUBMIT_LABEL: &str = "تأكيد التسجيل والانتقال للدفع";
const LOADING_LABEL: &str = "جاري معالجة البيانات...";

/// `disabled` attribute and label of the submit button; `disabled` follows
/// `loading` exactly.
fn submit_button(loading: bool) -> (bool, &'static str) {
    if loading {
        (true, LOADING_LABEL)
    } else {
        (false, SUBMIT_LABEL)
    }
}

fn build_submit_button(component: &RegistrationComponent) -> Html {
    let (disabled, label) = submit_button(component.form.is_loading());

    html! {
        <button
            type="submit"
            {disabled}
            class="w-full bg-blue-900 text-white py-4 rounded-xl font-bold text-lg shadow-lg hover:bg-blue-800 transform hover:-translate-y-0.5 transition-all duration-200 disabled:bg-gray-400 disabled:transform-none"
        >
            <span class="flex items-center justify-center gap-2">{ label }</span>
        </button>
    }
}
