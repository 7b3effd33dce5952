//! `std_srvs`

pub mod srv {
    use crate::msg::ServiceMsg;
    use serde::{Deserialize, Serialize};

    /// Service without payload.
    pub struct Empty;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct Empty_Request {}

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct Empty_Response {}

    impl ServiceMsg for Empty {
        type Request = Empty_Request;
        type Response = Empty_Response;

        fn type_name() -> &'static str {
            "std_srvs/srv/Empty"
        }
    }

    crate::impl_type_support!(
        Empty_Request => "std_srvs/srv/Empty_Request",
        Empty_Response => "std_srvs/srv/Empty_Response",
    );
}
