//! `std_msgs`

pub mod msg {
    use crate::time::Time;
    use serde::{Deserialize, Serialize};

    /// Standard metadata for stamped data.
    #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct Header {
        pub seq: u32,
        pub stamp: Time,
        pub frame_id: String,
    }

    impl Header {
        /// Header in `frame_id` stamped with the current time.
        pub fn now(frame_id: impl Into<String>) -> Self {
            Self {
                seq: 0,
                stamp: Time::now(),
                frame_id: frame_id.into(),
            }
        }
    }

    crate::impl_type_support!(Header => "std_msgs/msg/Header");
}
