//! `geometry_msgs`

pub mod msg {
    use crate::interfaces::std_msgs::msg::Header;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct Point {
        pub x: f64,
        pub y: f64,
        pub z: f64,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Quaternion {
        pub x: f64,
        pub y: f64,
        pub z: f64,
        pub w: f64,
    }

    impl Default for Quaternion {
        /// The identity rotation.
        fn default() -> Self {
            Self {
                x: 0.0,
                y: 0.0,
                z: 0.0,
                w: 1.0,
            }
        }
    }

    impl Quaternion {
        /// Rotation of `yaw` radians around the z axis.
        pub fn from_yaw(yaw: f64) -> Self {
            let half = yaw / 2.0;
            Self {
                x: 0.0,
                y: 0.0,
                z: half.sin(),
                w: half.cos(),
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct Pose {
        pub position: Point,
        pub orientation: Quaternion,
    }

    /// A pose with a reference frame and time stamp.
    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct PoseStamped {
        pub header: Header,
        pub pose: Pose,
    }

    impl PoseStamped {
        /// Planar pose in `frame_id`.
        pub fn new_2d(frame_id: impl Into<String>, x: f64, y: f64, yaw: f64) -> Self {
            Self {
                header: Header::now(frame_id),
                pose: Pose {
                    position: Point { x, y, z: 0.0 },
                    orientation: Quaternion::from_yaw(yaw),
                },
            }
        }
    }

    crate::impl_type_support!(
        Point => "geometry_msgs/msg/Point",
        Quaternion => "geometry_msgs/msg/Quaternion",
        Pose => "geometry_msgs/msg/Pose",
        PoseStamped => "geometry_msgs/msg/PoseStamped",
    );

}
