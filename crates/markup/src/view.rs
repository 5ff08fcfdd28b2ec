use shared::UserRecord;

use crate::template::{Fragment, RenderedHtml};

/// Profile card for a fetched user: heading, avatar and a short definition list.
pub fn render_user_view(user: &UserRecord) -> RenderedHtml {
    Fragment::new("\n    <h4>")
        .value(user.name.as_deref(), " (@")
        .value(&user.login, ")</h4>\n    <img src=\"")
        .value(&user.avatar_url, "\" alt=\"")
        .value(&user.login, "\" height=\"100\">\n    <dl>\n        <dt>Location</dt>\n        <dd>")
        .value(user.location.as_deref(), "</dd>\n        <dt>Repositories</dt>\n        <dd>")
        .value(user.public_repos, "</dd>\n    </dl>\n    ")
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        UserRecord {
            name: Some("Foo".into()),
            login: "foo".into(),
            avatar_url: "http://x/a.png".into(),
            location: Some("Tokyo".into()),
            public_repos: 3,
        }
    }

    #[test]
    fn renders_profile_fields_in_order() {
        let html = render_user_view(&record());
        let html = html.as_str();

        assert!(html.contains("<h4>Foo (@foo)</h4>"));
        assert!(html.contains("<img src=\"http://x/a.png\" alt=\"foo\" height=\"100\">"));
        assert!(html.contains("<dt>Location</dt>\n        <dd>Tokyo</dd>"));
        assert!(html.contains("<dt>Repositories</dt>\n        <dd>3</dd>"));
        assert!(html.find("<h4>") < html.find("<img"));
        assert!(html.find("<img") < html.find("<dl>"));
    }

    #[test]
    fn escapes_markup_in_remote_fields() {
        let user = UserRecord {
            name: Some("<script>alert('x')</script>".into()),
            login: "a\"b".into(),
            avatar_url: "http://x/a.png?a=1&b=2".into(),
            location: Some("R&D".into()),
            public_repos: 0,
        };
        let html = render_user_view(&user);
        let html = html.as_str();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
        assert!(html.contains("alt=\"a&quot;b\""));
        assert!(html.contains("src=\"http://x/a.png?a=1&amp;b=2\""));
        assert!(html.contains("<dd>R&amp;D</dd>"));
    }

    #[test]
    fn absent_name_and_location_render_as_null() {
        let user = UserRecord {
            name: None,
            location: None,
            ..record()
        };
        let html = render_user_view(&user);

        assert!(html.as_str().contains("<h4>null (@foo)</h4>"));
        assert!(html.as_str().contains("<dd>null</dd>"));
    }
}
