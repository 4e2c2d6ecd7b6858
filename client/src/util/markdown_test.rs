use super::*;

#[test]
fn renders_emphasis_and_lists() {
    let out = render_markdown_html("**FRL** applies:\n\n- walls\n- floors");
    assert!(out.contains("<strong>FRL</strong>"));
    assert!(out.contains("<li>walls</li>"));
}

#[test]
fn strips_raw_html() {
    let out = render_markdown_html("safe <script>alert(1)</script> text");
    assert!(!out.contains("<script>"));
    assert!(out.contains("safe"));
}

#[test]
fn plain_text_is_wrapped_in_paragraph() {
    assert_eq!(render_markdown_html("2.4m"), "<p>2.4m</p>\n");
}

#[test]
fn script_link_destination_is_replaced() {
    let out = render_markdown_html("[NCC](javascript:alert(document.cookie))");
    assert!(!out.contains("javascript:"));
    assert!(out.contains(r##"<a href="#">NCC</a>"##));
}

#[test]
fn script_image_and_data_destinations_are_replaced() {
    let image = render_markdown_html("![plan](JavaScript:alert(1))");
    assert!(!image.to_ascii_lowercase().contains("javascript:"));

    let data = render_markdown_html("[x](data:text/html;base64,PHNjcmlwdD4=)");
    assert!(!data.contains("data:"));
}

#[test]
fn web_mail_and_relative_links_are_kept() {
    let out = render_markdown_html("[ABCB](https://ncc.abcb.gov.au/) and [mail](mailto:help@abcb.gov.au)");
    assert!(out.contains(r#"href="https://ncc.abcb.gov.au/""#));
    assert!(out.contains(r#"href="mailto:help@abcb.gov.au""#));

    let relative = render_markdown_html("[part F](/docs/f2.html#ceilings)");
    assert!(relative.contains(r#"href="/docs/f2.html#ceilings""#));
}

#[test]
fn safe_url_classification() {
    assert!(is_safe_url("http://example.com"));
    assert!(is_safe_url("HTTPS://example.com"));
    assert!(is_safe_url("section-f2"));
    assert!(is_safe_url("./a:b"));
    assert!(is_safe_url("#top"));
    assert!(!is_safe_url("javascript:alert(1)"));
    assert!(!is_safe_url("  vbscript:msgbox"));
}
