#[derive(Clone, PartialEq, prost::Message)]
pub struct StringList {
    #[prost(string, repeated, tag = "1")]
    pub values: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct IntList {
    #[prost(int32, repeated, tag = "1")]
    pub values: Vec<i32>,
}

/// Payload of a value type that only a registered custom codec understands.
#[derive(Clone, PartialEq, prost::Message)]
pub struct CustomValue {
    #[prost(string, tag = "1")]
    pub type_id: String,
    #[prost(bytes = "vec", tag = "2")]
    pub data: Vec<u8>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DialogAttribute {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(oneof = "dialog_attribute::Value", tags = "2, 3, 4, 5, 6, 7, 8, 9, 10")]
    pub value: Option<dialog_attribute::Value>,
}

pub mod dialog_attribute {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Value {
        #[prost(string, tag = "2")]
        StringValue(String),
        #[prost(int32, tag = "3")]
        IntValue(i32),
        #[prost(int64, tag = "4")]
        LongValue(i64),
        #[prost(float, tag = "5")]
        FloatValue(f32),
        #[prost(double, tag = "6")]
        DoubleValue(f64),
        #[prost(bool, tag = "7")]
        BoolValue(bool),
        #[prost(message, tag = "8")]
        StringList(super::StringList),
        #[prost(message, tag = "9")]
        IntList(super::IntList),
        #[prost(message, tag = "10")]
        Custom(super::CustomValue),
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DialogContext {
    #[prost(string, tag = "1")]
    pub dialog_id: String,
    #[prost(string, tag = "2")]
    pub dialog_type: String,
    #[prost(bool, tag = "3")]
    pub center: bool,
    #[prost(message, repeated, tag = "4")]
    pub attributes: Vec<DialogAttribute>,
}
