//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Once;
use std::thread;
use std::time::Duration;

use rs_readable::logging::{init_logging, LogFormat};

static INIT: Once = Once::new();

pub fn init_test_tracing() {
    INIT.call_once(|| init_logging(LogFormat::Text));
}

pub const MINIMAL_HTML: &str =
    "<html><head><title>T</title></head><body><p>Hello world</p></body></html>";

/// A page with enough prose for readability to score it as an article,
/// surrounded by navigation and footer noise.
pub const ARTICLE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>A Note About Commit Messages</title>
    <meta name="author" content="Jane Doe">
    <meta property="og:site_name" content="Example Notes">
</head>
<body>
    <nav><a href="/">Home</a> <a href="/archive">Archive</a></nav>
    <article>
        <h1>A Note About Commit Messages</h1>
        <p>Capitalized, short summary of fifty characters or less. More detailed
        explanatory text, if necessary, wrapped to about seventy-two characters.
        The first line is treated as the subject of the commit and the rest as the body.</p>
        <p>The blank line separating the summary from the body is critical unless
        you omit the body entirely; tools like rebase can get confused if you run
        the two together. Read the <a href="/2008/04/19/guide.html">full guide</a> for details.</p>
        <p>Write your commit message in the imperative: "Fix bug" and not "Fixed bug"
        or "Fixes bug". This convention matches up with commit messages generated
        by commands like merge and revert, which keeps history consistent.</p>
        <p>Further paragraphs come after blank lines. Bullet points are okay too,
        typically a hyphen or asterisk is used for the bullet, preceded by a single
        space, with blank lines in between, but conventions vary here.</p>
    </article>
    <footer><p>Copyright Example Notes. All rights reserved.</p></footer>
</body>
</html>
"#;

/// A typical HTML error page.
pub const NOT_FOUND_HTML: &str = r#"<html><head><title>Not Found</title></head>
<body><h1>Not Found</h1><p>The requested page could not be found on this server. Check the address and try again later.</p></body></html>"#;

/// Starts a one-shot server that sends `200` headers announcing a 5000-byte
/// body, writes a fragment of it, then holds the connection open for `stall`.
/// Returns the URL to request.
pub fn stalled_body_server(stall: Duration) -> String {
    let listener = match TcpListener::bind("127.0.0.1:0") {
        Ok(l) => l,
        Err(err) => panic!("could not bind: {err}"),
    };
    let addr = match listener.local_addr() {
        Ok(a) => a,
        Err(err) => panic!("no local addr: {err}"),
    };

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        let mut request = [0u8; 1024];
        let _ = stream.read(&mut request);
        let _ = stream.write_all(
            b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 5000\r\n\r\n<html><head><title>Partial</title>",
        );
        let _ = stream.flush();
        thread::sleep(stall);
    });

    format!("http://{addr}/")
}
