//! Feed a document in small chunks and print the event stream as it arrives,
//! showing how string fragments stream before the full value is known.
//!
//! Run with `cargo run --example print_events`.

use jsonpush::{ErrorKind, PushParser, Sink};

struct PrintSink {
    depth: usize,
}

impl PrintSink {
    fn line(&self, text: &str) {
        println!("{:indent$}{text}", "", indent = self.depth * 2);
    }
}

impl Sink for PrintSink {
    fn null(&mut self) {
        self.line("null");
    }

    fn boolean(&mut self, value: bool) {
        self.line(&format!("boolean {value}"));
    }

    fn integer(&mut self, value: i64) {
        self.line(&format!("integer {value}"));
    }

    fn float(&mut self, value: f64) {
        self.line(&format!("float {value}"));
    }

    fn string(&mut self, bytes: &[u8]) {
        self.line(&format!("string {:?}", String::from_utf8_lossy(bytes)));
    }

    fn string_start(&mut self, bytes: &[u8]) {
        self.line(&format!("string… {:?}", String::from_utf8_lossy(bytes)));
    }

    fn string_cont(&mut self, bytes: &[u8]) {
        self.line(&format!("      … {:?}", String::from_utf8_lossy(bytes)));
    }

    fn string_end(&mut self) {
        self.line("      … end");
    }

    fn name(&mut self, bytes: &[u8]) {
        self.line(&format!("name {:?}", String::from_utf8_lossy(bytes)));
    }

    fn name_start(&mut self, bytes: &[u8]) {
        self.line(&format!("name… {:?}", String::from_utf8_lossy(bytes)));
    }

    fn name_cont(&mut self, bytes: &[u8]) {
        self.line(&format!("    … {:?}", String::from_utf8_lossy(bytes)));
    }

    fn name_end(&mut self) {
        self.line("    … end");
    }

    fn object_start(&mut self) {
        self.line("object {");
        self.depth += 1;
    }

    fn object_end(&mut self) {
        self.depth -= 1;
        self.line("}");
    }

    fn array_start(&mut self) {
        self.line("array [");
        self.depth += 1;
    }

    fn array_end(&mut self) {
        self.depth -= 1;
        self.line("]");
    }

    fn error(&mut self, kind: ErrorKind) {
        self.line(&format!("error: {kind}"));
    }
}

fn main() {
    let chunks = [
        r#"{"model":"gpt","#,
        r#""prompt":"Tell me a lo"#,
        r#"ng story about strea"#,
        r#"ming parsers","max_tokens":25"#,
        r#"6,"stream":true}"#,
    ];

    let mut parser = PushParser::new(PrintSink { depth: 0 });
    for chunk in chunks {
        println!("--- feed {chunk:?}");
        if !parser.feed(chunk.as_bytes()) {
            break;
        }
    }
}
