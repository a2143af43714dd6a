//! Model-attribute binding: build an object from request parameters.

use axum::extract::{FromRequest, Request};

use crate::binding::{BindError, RequestParams};

/// Types that can be populated property-by-property from request
/// parameters. Parameters without a matching property are ignored.
pub trait BindParams: Sized {
    fn bind(params: &RequestParams) -> Result<Self, BindError>;
}

/// Extractor that binds `T` from the request parameters.
#[derive(Debug, Clone)]
pub struct ModelAttribute<T>(pub T);

impl<T, S> FromRequest<S> for ModelAttribute<T>
where
    T: BindParams,
    S: Send + Sync,
{
    type Rejection = BindError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let params = RequestParams::from_request(req, state).await?;
        T::bind(&params).map(ModelAttribute)
    }
}
