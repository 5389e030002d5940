pub fn mkerr(error_code: &str) -> serde_json::Value {
    serde_json::json!({ "errors": [error_code] })
}

pub fn mkdata(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "data": data })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evals_properly() {
        assert_eq!(
            mkerr("MY_ERR_CODE").to_string(),
            serde_json::json!({ "errors": ["MY_ERR_CODE"] }).to_string()
        );
    }
}
