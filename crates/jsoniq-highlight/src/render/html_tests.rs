use super::{HtmlConfig, html};
use crate::lexer::tokenize;

fn render(source: &str, config: &HtmlConfig) -> String {
    html(tokenize(source), config)
}

#[test]
fn wraps_in_pre_code() {
    insta::assert_snapshot!(
        render("let $x := 1", &HtmlConfig::default()),
        @r#"<pre class="highlight"><code><span class="k">let</span> <span class="nv">$x</span> <span class="o">:=</span> <span class="mi">1</span></code></pre>"#
    );
}

#[test]
fn escapes_markup() {
    let config = HtmlConfig::new().wrap(false);
    insta::assert_snapshot!(
        render(r#""a<b" & 'c'"#, &config),
        @r#"<span class="s2">&quot;a&lt;b&quot;</span> <span class="err">&amp;</span> <span class="s1">&#39;c&#39;</span>"#
    );
}

#[test]
fn namespaced_call_and_predicate() {
    let config = HtmlConfig::new().wrap(false);
    insta::assert_snapshot!(
        render("jn:doc($$[?true])", &config),
        @r#"<span class="nf">jn:doc</span><span class="p">(</span><span class="vg">$$</span><span class="p">[?</span><span class="nb">true</span><span class="p">])</span>"#
    );
}

#[test]
fn multi_line_tokens_are_split_per_line() {
    let config = HtmlConfig::new().wrap(false).line_numbers(true);
    insta::assert_snapshot!(render("(: a\nb :)\nlet", &config), @r#"
    <span class="lineno">1</span><span class="c">(: a</span>
    <span class="lineno">2</span><span class="c">b :)</span>
    <span class="lineno">3</span><span class="k">let</span>
    "#);
}

#[test]
fn blank_lines_are_numbered() {
    let config = HtmlConfig::new().wrap(false).line_numbers(true);
    insta::assert_snapshot!(render("1\n\n2\n", &config), @r#"
    <span class="lineno">1</span><span class="mi">1</span>
    <span class="lineno">2</span>
    <span class="lineno">3</span><span class="mi">2</span>
    "#);
}

#[test]
fn custom_class_is_escaped() {
    let config = HtmlConfig::new().css_class("code \"q\"");
    assert_eq!(
        render("", &config),
        r#"<pre class="code &quot;q&quot;"><code></code></pre>"#
    );
}

#[test]
fn stripping_markup_restores_input() {
    let source = "let $s := \"x\"\"y\"\n(: note :) return $s";
    let out = render(source, &HtmlConfig::new().wrap(false));

    let mut text = String::new();
    let mut in_tag = false;
    for c in out.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    let text = text
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    assert_eq!(text, source);
}
