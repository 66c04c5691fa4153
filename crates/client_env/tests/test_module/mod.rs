use client_env::{
    logger,
    tracing::{self, instrument},
};

#[instrument(skip_all, fields(flow = %client_env::Flow::DisputesRetrieve, resource_id = "dp_test"))]
pub async fn fn_with_colon(val: i32) {
    let a = 13;
    let b = 31;

    logger::log!(
        logger::Level::WARN,
        ?a,
        ?b,
        tag = ?logger::Tag::ApiOutgoingRequest,
        "fn_with_colon"
    );

    fn_without_colon(val).await;
}

#[instrument(fields(attempt = 1))]
pub async fn fn_without_colon(val: i32) {
    let a = 13;
    let b = 31;

    logger::info!(?a, ?b, val, "fn_without_colon");
}
