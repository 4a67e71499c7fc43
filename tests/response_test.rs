use rs_profile_extract::response::{handle_request_for_target, ProfileRequest};
use rs_profile_extract::Options;

const GRID_HTML: &str = r#"
<header><h2>someone</h2></header>
<article><a href="/p/abc/"><img src="/media/abc.jpg"></a></article>
"#;

fn collect(html: &str, target: &str) -> serde_json::Value {
    let response = handle_request_for_target(
        &ProfileRequest::collect_profile_data(),
        html,
        target,
        &Options::default(),
    );
    serde_json::to_value(&response).expect("serializable")
}

#[test]
fn full_url_target_resolves_relative_media() {
    let json = collect(GRID_HTML, "https://www.instagram.com/someone/");

    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["recent_posts"][0], "https://www.instagram.com/media/abc.jpg");
}

#[test]
fn bare_host_target_keeps_media_verbatim() {
    let json = collect(GRID_HTML, "www.instagram.com");

    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["recent_posts"][0], "/media/abc.jpg");
}

#[test]
fn url_target_on_unsupported_host_fails() {
    let json = collect(GRID_HTML, "https://example.com/instagram.com/");

    assert_eq!(json["success"], false);
    assert_eq!(json["kind"], "unsupported_platform");
    assert_eq!(json["message"], "Not on a supported profile page");
    assert!(json.get("data").is_none());
}

#[test]
fn caller_options_are_kept_for_url_targets() {
    let grid: String = (1..=5)
        .map(|i| format!(r#"<a href="/p/{i}/"><img src="/media/{i}.jpg"></a>"#))
        .collect();
    let html = format!("<header><h2>grid</h2></header><article>{grid}</article>");
    let options = Options {
        max_recent_media: 2,
        ..Options::default()
    };

    let response = handle_request_for_target(
        &ProfileRequest::collect_profile_data(),
        &html,
        "https://www.instagram.com/grid/",
        &options,
    );
    let data = response.data.expect("header present");
    assert_eq!(
        data.recent_media,
        vec![
            "https://www.instagram.com/media/1.jpg",
            "https://www.instagram.com/media/2.jpg",
        ]
    );
}
