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

fn identity_details(claims: &IdentityClaims) -> String {
    format!(
        "<p>Signed in as <strong>{}</strong> ({})</p>",
        escape(&claims.username),
        escape(&claims.email)
    )
}

pub fn home(identity: Option<&IdentityClaims>, auth_service_url: &str) -> String {
    let body = match identity {
        Some(claims) => format!("<h1>App service</h1>\n{}", identity_details(claims)),
        None => format!(
            "<h1>App service</h1>\n<p>You are not signed in. <a href=\"{}/login\">Log in</a></p>",
            escape(auth_service_url.trim_end_matches('/'))
        ),
    };
    page("App service", &body)
}

pub fn protected(claims: &IdentityClaims) -> String {
    let body = format!(
        "<h1>Protected</h1>\n{}\n<p>User id: {}</p>",
        identity_details(claims),
        claims.user_id
    );
    page("Protected", &body)
}
