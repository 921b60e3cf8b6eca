//! Sign in, sign up and password recovery

use dioxus::prelude::*;
use tripmate_domain::{ResetPasswordForm, SignInForm, SignUpForm};

use super::{use_page_title, Route};
use crate::ports::outbound::SignUpOutcome;
use crate::ui::presentation::components::FormField;
use crate::ui::presentation::services::use_auth_service;
use crate::ui::presentation::state::{use_auth_state, use_toast_state};
use crate::ui::use_platform;

/// Where the recovery e-mail link should land
#[cfg(target_arch = "wasm32")]
fn recovery_redirect() -> Option<String> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Some(format!("{}{}", origin, Route::SignInRoute {}))
}

#[cfg(not(target_arch = "wasm32"))]
fn recovery_redirect() -> Option<String> {
    None
}

#[component]
pub fn SignInRoute() -> Element {
    use_page_title("Entrar");
    let auth = use_auth_service();
    let platform = use_platform();
    let toasts = use_toast_state();
    let navigator = use_navigator();
    let mut form = use_signal(SignInForm::default);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);
        let auth = auth.clone();
        let platform = platform.clone();
        let mut toasts = toasts;
        let current = form.read().clone();
        spawn(async move {
            match auth.sign_in(&current).await {
                Ok(session) => {
                    toasts.success(
                        &platform,
                        format!("Bem-vindo de volta, {}!", session.user.display_name()),
                    );
                    navigator.push(Route::PlannerRoute {});
                }
                Err(e) => toasts.error(&platform, e.message),
            }
            submitting.set(false);
        });
    };

    let current = form.read().clone();
    rsx! {
        section {
            class: "page page-auth",
            h1 { "Entrar" }
            form {
                class: "auth-form",
                novalidate: true,
                onsubmit,
                FormField {
                    label: "E-mail",
                    id: "email",
                    input_type: "email",
                    autocomplete: "email",
                    value: current.email,
                    oninput: move |v: String| form.write().email = v,
                }
                FormField {
                    label: "Senha",
                    id: "password",
                    input_type: "password",
                    autocomplete: "current-password",
                    value: current.password,
                    oninput: move |v: String| form.write().password = v,
                }
                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Entrando..." } else { "Entrar" }
                }
            }
            div {
                class: "auth-links",
                Link { to: Route::ResetPasswordRoute {}, "Esqueci minha senha" }
                Link { to: Route::SignUpRoute {}, "Criar uma conta" }
            }
        }
    }
}

#[component]
pub fn SignUpRoute() -> Element {
    use_page_title("Criar conta");
    let auth = use_auth_service();
    let platform = use_platform();
    let toasts = use_toast_state();
    let navigator = use_navigator();
    let mut form = use_signal(SignUpForm::default);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);
        let auth = auth.clone();
        let platform = platform.clone();
        let mut toasts = toasts;
        let current = form.read().clone();
        spawn(async move {
            match auth.sign_up(&current).await {
                Ok(SignUpOutcome::SignedIn(_)) => {
                    toasts.success(&platform, "Conta criada com sucesso!");
                    navigator.push(Route::PlannerRoute {});
                }
                Ok(SignUpOutcome::ConfirmationPending(_)) => {
                    toasts.info(
                        &platform,
                        "Conta criada! Verifique seu e-mail para confirmar o cadastro.",
                    );
                    navigator.push(Route::SignInRoute {});
                }
                Err(e) => toasts.error(&platform, e.message),
            }
            submitting.set(false);
        });
    };

    let current = form.read().clone();
    rsx! {
        section {
            class: "page page-auth",
            h1 { "Criar conta" }
            form {
                class: "auth-form",
                novalidate: true,
                onsubmit,
                FormField {
                    label: "Nome completo",
                    id: "full_name",
                    autocomplete: "name",
                    value: current.full_name,
                    oninput: move |v: String| form.write().full_name = v,
                }
                FormField {
                    label: "E-mail",
                    id: "email",
                    input_type: "email",
                    autocomplete: "email",
                    value: current.email,
                    oninput: move |v: String| form.write().email = v,
                }
                FormField {
                    label: "Senha",
                    id: "password",
                    input_type: "password",
                    autocomplete: "new-password",
                    placeholder: "Mínimo de 6 caracteres",
                    value: current.password,
                    oninput: move |v: String| form.write().password = v,
                }
                FormField {
                    label: "Confirme a senha",
                    id: "password_confirmation",
                    input_type: "password",
                    autocomplete: "new-password",
                    value: current.password_confirmation,
                    oninput: move |v: String| form.write().password_confirmation = v,
                }
                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Criando conta..." } else { "Criar conta" }
                }
            }
            div {
                class: "auth-links",
                "Já tem conta? "
                Link { to: Route::SignInRoute {}, "Entrar" }
            }
        }
    }
}

#[component]
pub fn ResetPasswordRoute() -> Element {
    use_page_title("Recuperar senha");
    let auth = use_auth_service();
    let auth_state = use_auth_state();
    let platform = use_platform();
    let toasts = use_toast_state();
    let mut email = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);
        let auth = auth.clone();
        let platform = platform.clone();
        let mut toasts = toasts;
        let form = ResetPasswordForm {
            email: email.read().clone(),
        };
        spawn(async move {
            match auth.reset_password(&form, recovery_redirect()).await {
                Ok(()) => {
                    toasts.success(&platform, "Enviamos um link de recuperação para seu e-mail.")
                }
                Err(e) => toasts.error(&platform, e.message),
            }
            submitting.set(false);
        });
    };

    let sent = *auth_state.recovery_sent.read();
    rsx! {
        section {
            class: "page page-auth",
            h1 { "Recuperar senha" }
            if sent {
                p {
                    class: "notice",
                    "Confira sua caixa de entrada e siga o link para criar uma nova senha."
                }
            }
            form {
                class: "auth-form",
                novalidate: true,
                onsubmit,
                FormField {
                    label: "E-mail",
                    id: "email",
                    input_type: "email",
                    autocomplete: "email",
                    value: email(),
                    oninput: move |v: String| email.set(v),
                }
                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Enviando..." } else { "Enviar link" }
                }
            }
            div {
                class: "auth-links",
                Link { to: Route::SignInRoute {}, "Voltar para o login" }
            }
        }
    }
}
