use auth_contract::{escape_html as escape, IdentityClaims};

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>{}</title></head>
<body>
{}
</body>
</html>
"#,
        escape(title),
        body
    )
}

fn protected_link(app_service_url: &str, token: &str) -> String {
    format!(
        "<a href=\"{}/protected?token={}\">Open the app service</a>",
        escape(app_service_url.trim_end_matches('/')),
        escape(token)
    )
}

pub fn home(identity: Option<(&IdentityClaims, &str)>, app_service_url: &str) -> String {
    let body = match identity {
        Some((claims, token)) => format!(
            "<h1>Welcome, {}</h1>\n<p>{}</p>\n<p>{}</p>",
            escape(&claims.username),
            escape(&claims.email),
            protected_link(app_service_url, token)
        ),
        None => concat!(
            "<h1>Welcome</h1>\n",
            r#"<p><a href="/login">Log in</a> or <a href="/register">register</a>.</p>"#
        )
        .to_owned(),
    };
    page("Home", &body)
}

pub fn register_form() -> String {
    page(
        "Register",
        r#"<h1>Register</h1>
<form method="post" action="/register">
<input name="username" placeholder="Username">
<input name="email" type="email" placeholder="Email">
<input name="password" type="password" placeholder="Password">
<button type="submit">Register</button>
</form>"#,
    )
}

pub fn login_form() -> String {
    page(
        "Login",
        r#"<h1>Login</h1>
<form method="post" action="/login">
<input name="email" type="email" placeholder="Email">
<input name="password" type="password" placeholder="Password">
<button type="submit">Log in</button>
</form>"#,
    )
}

pub fn user(claims: &IdentityClaims, token: &str, app_service_url: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p>{}</p>",
        escape(&claims.username),
        escape(&claims.email),
        protected_link(app_service_url, token)
    );
    page("User", &body)
}
