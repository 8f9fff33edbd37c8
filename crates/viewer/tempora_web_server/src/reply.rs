use std::borrow::Cow;

/// A fully buffered response, independent of the HTTP library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Reply {
    status: u16,
    content_type: Cow<'static, str>,
    body: Vec<u8>,
}

impl Reply {
    pub fn new(status: u16, content_type: impl Into<Cow<'static, str>>, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type: content_type.into(),
            body,
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self::new(status, "text/plain", body.into().into_bytes())
    }

    pub fn html(status: u16, body: impl Into<String>) -> Self {
        Self::new(status, "text/html", body.into().into_bytes())
    }

    pub fn json(status: u16, value: &impl serde::Serialize) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self::new(status, "application/json", body),
            Err(err) => {
                tempora_log::error!("Failed to serialize response: {err}");
                Self::text(500, "Server Error")
            }
        }
    }

    #[inline]
    pub fn status(&self) -> u16 {
        self.status
    }

    #[cfg(test)]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    #[cfg(test)]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_response(self) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
        let Self {
            status,
            content_type,
            body,
        } = self;

        let mut response =
            tiny_http::Response::from_data(body).with_status_code(tiny_http::StatusCode(status));

        // The content type comes from a fixed table or `mime_guess2`, so this only fails on a bug.
        match tiny_http::Header::from_bytes(&b"Content-Type"[..], content_type.as_bytes()) {
            Ok(header) => response.add_header(header),
            Err(()) => tempora_log::warn_once!("Invalid content type {content_type:?}"),
        }

        response
    }
}
