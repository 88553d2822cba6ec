#![allow(dead_code)]

use jsonpush::Event;
use serde_json::{Map, Value};

pub const ORIGINAL: &str = r#"
{
    "channels": ["power", "thermal"],
    "device": "probe-7",
    "firmware": {
        "build": 204,
        "version": "2.4.1"
    },
    "readings": [
        {"unit": "mw", "value": 118},
        {"unit": "c", "value": 36.5}
    ],
    "uptime": 86400
}"#;

// The same document minified, cut into chunks on deliberately awkward seams:
// inside strings, inside numbers, and between closing delimiters.
#[rustfmt::skip]
pub const STREAM: [&str; 9] = [
    r#"{"channels":["po"#,                        // (building "power")
    r#"wer","ther"#,                              // string end -> next string, cut mid-word
    r#"mal"],"device":"probe-7""#,                // array end after a string
    r#","firmware":{"build":20"#,                 // cut inside an integer
    r#"4,"version":"2.4.1"}"#,                    // integer finished by the comma
    r#","readings":[{"unit":"mw","value":118}"#,  // whole member object in one chunk
    r#",{"unit":"c","value":36"#,                 // cut before the decimal point
    r#".5}],"uptime":8640"#,                      // float finished by the brace
    r#"0}"#,                                      // closes the number and the document
];

#[test]
fn stream_matches_the_original_document() {
    let streamed = STREAM.join("");

    let value: Value = serde_json::from_str(ORIGINAL).unwrap();
    let minified = serde_json::to_string(&value).unwrap();

    assert_eq!(streamed, minified);
}

/// Rebuild a `serde_json::Value` from a recorded event stream, concatenating
/// string and name fragments along the way. Panics on malformed streams —
/// integration tests only feed valid documents.
pub fn reconstruct(events: &[Event]) -> Value {
    enum Node {
        Arr(Vec<Value>),
        Obj(Map<String, Value>, Option<String>),
    }

    fn place(stack: &mut [Node], root: &mut Option<Value>, value: Value) {
        match stack.last_mut() {
            Some(Node::Arr(items)) => items.push(value),
            Some(Node::Obj(map, key)) => {
                map.insert(key.take().expect("value without a member name"), value);
            }
            None => *root = Some(value),
        }
    }

    fn set_key(stack: &mut [Node], name: String) {
        match stack.last_mut() {
            Some(Node::Obj(_, key)) => *key = Some(name),
            _ => panic!("member name outside an object"),
        }
    }

    fn utf8(bytes: &[u8]) -> String {
        String::from_utf8(bytes.to_vec()).expect("fixture text is UTF-8")
    }

    let mut stack: Vec<Node> = Vec::new();
    let mut root: Option<Value> = None;
    let mut fragment: Vec<u8> = Vec::new();

    for event in events {
        match event {
            Event::Null => place(&mut stack, &mut root, Value::Null),
            Event::Boolean(value) => place(&mut stack, &mut root, Value::Bool(*value)),
            Event::Integer(value) => place(&mut stack, &mut root, Value::from(*value)),
            Event::Float(value) => place(
                &mut stack,
                &mut root,
                serde_json::Number::from_f64(*value)
                    .map(Value::Number)
                    .expect("non-finite float"),
            ),
            Event::String(bytes) => {
                place(&mut stack, &mut root, Value::String(utf8(bytes)));
            }
            Event::StringStart(bytes)
            | Event::StringCont(bytes)
            | Event::NameStart(bytes)
            | Event::NameCont(bytes) => fragment.extend_from_slice(bytes),
            Event::StringEnd => {
                let text = utf8(&std::mem::take(&mut fragment));
                place(&mut stack, &mut root, Value::String(text));
            }
            Event::Name(bytes) => set_key(&mut stack, utf8(bytes)),
            Event::NameEnd => {
                let text = utf8(&std::mem::take(&mut fragment));
                set_key(&mut stack, text);
            }
            Event::ObjectStart => stack.push(Node::Obj(Map::new(), None)),
            Event::ArrayStart => stack.push(Node::Arr(Vec::new())),
            Event::ObjectEnd => match stack.pop() {
                Some(Node::Obj(map, _)) => place(&mut stack, &mut root, Value::Object(map)),
                _ => panic!("object end without an open object"),
            },
            Event::ArrayEnd => match stack.pop() {
                Some(Node::Arr(items)) => place(&mut stack, &mut root, Value::Array(items)),
                _ => panic!("array end without an open array"),
            },
            Event::Error(kind) => panic!("unexpected parse error: {kind}"),
        }
    }

    root.expect("document incomplete")
}
