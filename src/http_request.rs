use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Authorization / Content-Type pair shared by every request of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    pub authorization: String,
    pub content_type: String,
}

impl HeaderSet {
    pub fn is_empty(&self) -> bool {
        return self.authorization.is_empty() && self.content_type.is_empty();
    }
}

/// One entry of the requests file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub url: String,
    pub method: String,
    // accepted on input, the shared set is what goes on the wire
    pub headers: HeaderSet,
}

// Object keys match field names ignoring ASCII case, unknown keys are skipped
// and `null` leaves a field empty.
enum Field {
    Url,
    Method,
    Headers,
    Authorization,
    ContentType,
    Other,
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Field, D::Error> {
        let key = String::deserialize(deserializer)?;
        let field = [
            ("url", Field::Url),
            ("method", Field::Method),
            ("headers", Field::Headers),
            ("authorization", Field::Authorization),
            ("content-type", Field::ContentType),
            ("contenttype", Field::ContentType),
        ]
        .into_iter()
        .find(|(name, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, field)| field)
        .unwrap_or(Field::Other);
        return Ok(field);
    }
}

fn next_string<'de, A: MapAccess<'de>>(map: &mut A) -> Result<String, A::Error> {
    return Ok(map.next_value::<Option<String>>()?.unwrap_or_default());
}

impl<'de> Deserialize<'de> for HeaderSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<HeaderSet, D::Error> {
        struct HeaderSetVisitor;

        impl<'de> Visitor<'de> for HeaderSetVisitor {
            type Value = HeaderSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object with Authorization and Content-Type")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<HeaderSet, A::Error> {
                let mut headers = HeaderSet::default();
                while let Some(field) = map.next_key::<Field>()? {
                    match field {
                        Field::Authorization => headers.authorization = next_string(&mut map)?,
                        Field::ContentType => headers.content_type = next_string(&mut map)?,
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                return Ok(headers);
            }
        }

        return deserializer.deserialize_map(HeaderSetVisitor);
    }
}

impl<'de> Deserialize<'de> for RequestDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<RequestDescriptor, D::Error> {
        struct RequestVisitor;

        impl<'de> Visitor<'de> for RequestVisitor {
            type Value = RequestDescriptor;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a request object with a url")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RequestDescriptor, A::Error> {
                let mut url = None;
                let mut method = String::new();
                let mut headers = HeaderSet::default();
                while let Some(field) = map.next_key::<Field>()? {
                    match field {
                        Field::Url => url = Some(next_string(&mut map)?),
                        Field::Method => method = next_string(&mut map)?,
                        Field::Headers => {
                            headers = map.next_value::<Option<HeaderSet>>()?.unwrap_or_default()
                        }
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                let url = url.ok_or_else(|| de::Error::missing_field("url"))?;
                return Ok(RequestDescriptor { url, method, headers });
            }
        }

        return deserializer.deserialize_map(RequestVisitor);
    }
}
