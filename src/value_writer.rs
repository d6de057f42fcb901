//! Serialization of manifest property values into the runtime's writer protocol.

use serde_json::{Map, Value};

use crate::property_value::{PropertyMap, PropertyValue};

/// Typed value sink exposed by the embedded runtime.
pub trait JsValueWriter {
    fn write_boolean(&mut self, value: bool);
    fn write_int64(&mut self, value: i64);
    fn write_double(&mut self, value: f64);
    fn write_null(&mut self);
    fn write_string(&mut self, value: &str);
    fn write_array_begin(&mut self);
    fn write_array_end(&mut self);
    fn write_object_begin(&mut self);
    fn write_property_name(&mut self, name: &str);
    fn write_object_end(&mut self);
}

/// Writes `value` and, recursively, everything it contains.
///
/// Unsigned values share the signed 64-bit wire representation; values above
/// `i64::MAX` wrap.
pub fn write_property_value<W>(value: &PropertyValue, writer: &mut W)
where
    W: JsValueWriter + ?Sized,
{
    match value {
        PropertyValue::Bool(value) => writer.write_boolean(*value),
        PropertyValue::Int64(value) => writer.write_int64(*value),
        PropertyValue::UInt64(value) => writer.write_int64(*value as i64),
        PropertyValue::Double(value) => writer.write_double(*value),
        PropertyValue::Null => writer.write_null(),
        PropertyValue::String(value) => writer.write_string(value),
        PropertyValue::Array(values) => {
            writer.write_array_begin();
            for value in values {
                write_property_value(value, writer);
            }
            writer.write_array_end();
        }
        PropertyValue::Object(entries) => write_object(entries, writer),
    }
}

/// Writes a component's initial properties as a single object. Nothing is
/// written when the component has none.
pub fn write_initial_properties<W>(properties: Option<&PropertyMap>, writer: &mut W)
where
    W: JsValueWriter + ?Sized,
{
    if let Some(entries) = properties {
        write_object(entries, writer);
    }
}

fn write_object<W>(entries: &PropertyMap, writer: &mut W)
where
    W: JsValueWriter + ?Sized,
{
    writer.write_object_begin();
    for (name, value) in entries {
        writer.write_property_name(name);
        write_property_value(value, writer);
    }
    writer.write_object_end();
}

enum Frame {
    Array(Vec<Value>),
    Object {
        map: Map<String, Value>,
        pending_name: Option<String>,
    },
}

/// Writer that assembles a JSON value, for hosts that take props as JSON.
#[derive(Default)]
pub struct JsonValueWriter {
    stack: Vec<Frame>,
    root: Option<Value>,
}

impl JsonValueWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the completed value, or `None` if nothing (or an unbalanced
    /// sequence) was written.
    pub fn into_value(self) -> Option<Value> {
        if !self.stack.is_empty() {
            return None;
        }
        self.root
    }

    fn push_value(&mut self, value: Value) {
        match self.stack.last_mut() {
            Some(Frame::Array(values)) => values.push(value),
            Some(Frame::Object { map, pending_name }) => match pending_name.take() {
                Some(name) => {
                    map.insert(name, value);
                }
                None => tracing::warn!("json writer received a value without a property name"),
            },
            None => self.root = Some(value),
        }
    }
}

impl JsValueWriter for JsonValueWriter {
    fn write_boolean(&mut self, value: bool) {
        self.push_value(Value::Bool(value));
    }

    fn write_int64(&mut self, value: i64) {
        self.push_value(Value::from(value));
    }

    fn write_double(&mut self, value: f64) {
        self.push_value(Value::from(value));
    }

    fn write_null(&mut self) {
        self.push_value(Value::Null);
    }

    fn write_string(&mut self, value: &str) {
        self.push_value(Value::String(value.to_string()));
    }

    fn write_array_begin(&mut self) {
        self.stack.push(Frame::Array(Vec::new()));
    }

    fn write_array_end(&mut self) {
        match self.stack.pop() {
            Some(Frame::Array(values)) => self.push_value(Value::Array(values)),
            Some(frame) => {
                tracing::warn!("json writer closed an array while an object was open");
                self.stack.push(frame);
            }
            None => tracing::warn!("json writer closed an array that was never opened"),
        }
    }

    fn write_object_begin(&mut self) {
        self.stack.push(Frame::Object {
            map: Map::new(),
            pending_name: None,
        });
    }

    fn write_property_name(&mut self, name: &str) {
        match self.stack.last_mut() {
            Some(Frame::Object { pending_name, .. }) => *pending_name = Some(name.to_string()),
            _ => tracing::warn!("json writer received property name '{name}' outside an object"),
        }
    }

    fn write_object_end(&mut self) {
        match self.stack.pop() {
            Some(Frame::Object { map, .. }) => self.push_value(Value::Object(map)),
            Some(frame) => {
                tracing::warn!("json writer closed an object while an array was open");
                self.stack.push(frame);
            }
            None => tracing::warn!("json writer closed an object that was never opened"),
        }
    }
}
