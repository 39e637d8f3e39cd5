//! Response detection: unwrap an envelope into the payload the call
//! expected, or the matching typed error.

use lodestone_shared::responses::ResponseEnvelope;

use crate::error::ClientError;

pub(crate) fn expect_element<T>(
    method: &str,
    url: &str,
    envelope: ResponseEnvelope<T>,
) -> Result<T, ClientError> {
    match envelope {
        ResponseEnvelope::Element { element } => Ok(element),
        ResponseEnvelope::Error { fault } => Err(ClientError::from_fault(fault)),
        other => Err(unexpected(method, url, other.category_name())),
    }
}

pub(crate) fn expect_list<T>(
    method: &str,
    url: &str,
    envelope: ResponseEnvelope<T>,
) -> Result<Vec<T>, ClientError> {
    match envelope {
        ResponseEnvelope::ElementList { elements } => Ok(elements),
        ResponseEnvelope::Error { fault } => Err(ClientError::from_fault(fault)),
        other => Err(unexpected(method, url, other.category_name())),
    }
}

pub(crate) fn expect_void<T>(
    method: &str,
    url: &str,
    envelope: ResponseEnvelope<T>,
) -> Result<(), ClientError> {
    match envelope {
        ResponseEnvelope::Void => Ok(()),
        ResponseEnvelope::Error { fault } => Err(ClientError::from_fault(fault)),
        other => Err(unexpected(method, url, other.category_name())),
    }
}

fn unexpected(method: &str, url: &str, category: &str) -> ClientError {
    ClientError::UnexpectedResponse {
        method: method.to_string(),
        url: url.to_string(),
        category: category.to_string(),
    }
}
