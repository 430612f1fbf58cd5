use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{AppError, LoginRequest};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    FieldError, Form, Input, ToastOptions,
};
use std::collections::HashMap;
use validator::Validate;

/// Sign-in page.
///
/// `redirect` carries the path the auth guard bounced the visitor from; after
/// a successful sign-in the visitor goes back there instead of Home.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let api = use_context::<ApiClient>();
    let mut auth = use_auth();
    let toast = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let redirect_target = use_signal(move || redirect);

    let go_to_destination = move || {
        navigator().replace(destination(redirect_target.read().as_deref()));
    };

    use_effect(move || {
        if auth.is_authenticated() {
            go_to_destination();
        }
    });

    let handle_login = move |_evt: FormEvent| {
        let api = api.clone();
        async move {
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let request = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            if let Err(errors) = request.validate() {
                field_errors.set(AppError::from(errors).field_errors);
                return;
            }

            loading.set(true);
            match api.login(&request).await {
                Ok(user) => {
                    auth.set_user(user);
                    go_to_destination();
                }
                Err(e) if !e.field_errors.is_empty() => {
                    field_errors.set(e.field_errors);
                }
                Err(e) => {
                    let message = e.friendly_message();
                    toast.error(message.clone(), ToastOptions::new());
                    error_msg.set(Some(message));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Guests and staff sign in with the same account" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    Form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Input {
                                label: "Email",
                                input_type: "email",
                                name: "email",
                                placeholder: "guest@example.com",
                                value: email(),
                                invalid: field_errors().contains_key("email"),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                            FieldError { message: field_errors().get("email").cloned() }
                        }
                        div { class: "auth-field",
                            Input {
                                label: "Password",
                                input_type: "password",
                                name: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                invalid: field_errors().contains_key("password"),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            FieldError { message: field_errors().get("password").cloned() }
                        }
                        Button {
                            button_type: "submit",
                            variant: ButtonVariant::Primary,
                            class: "auth-submit",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
            }
        }
    }
}

/// Where to go after signing in. Paths that do not parse as a dashboard
/// route, including `/login` itself, fall back to Home.
fn destination(redirect: Option<&str>) -> Route {
    redirect
        .and_then(|path| path.parse::<Route>().ok())
        .filter(|route| !matches!(route, Route::Login { .. } | Route::NotFound { .. }))
        .unwrap_or(Route::Home {})
}
