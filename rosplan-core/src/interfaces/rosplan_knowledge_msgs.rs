//! `rosplan_knowledge_msgs`

pub mod msg {
    use crate::interfaces::diagnostic_msgs::msg::KeyValue;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub enum KnowledgeType {
        #[default]
        Instance,
        Fact,
        Function,
    }

    /// An instance, fact or function of the knowledge base.
    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct KnowledgeItem {
        pub knowledge_type: KnowledgeType,
        pub instance_type: String,
        pub instance_name: String,
        pub attribute_name: String,
        pub values: Vec<KeyValue>,
        pub function_value: f64,
        pub is_negative: bool,
    }

    impl KnowledgeItem {
        /// A fact `attribute_name(values...)`.
        pub fn fact(attribute_name: impl Into<String>, values: Vec<KeyValue>) -> Self {
            Self {
                knowledge_type: KnowledgeType::Fact,
                attribute_name: attribute_name.into(),
                values,
                ..Default::default()
            }
        }
    }

    crate::impl_type_support!(KnowledgeItem => "rosplan_knowledge_msgs/msg/KnowledgeItem");
}

pub mod srv {
    use super::msg::KnowledgeItem;
    use crate::msg::ServiceMsg;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub enum UpdateType {
        #[default]
        AddKnowledge,
        AddGoal,
        RemoveKnowledge,
        RemoveGoal,
    }

    /// Add or remove knowledge.
    pub struct KnowledgeUpdateService;

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct KnowledgeUpdateService_Request {
        pub update_type: UpdateType,
        pub knowledge: KnowledgeItem,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct KnowledgeUpdateService_Response {
        pub success: bool,
    }

    impl ServiceMsg for KnowledgeUpdateService {
        type Request = KnowledgeUpdateService_Request;
        type Response = KnowledgeUpdateService_Response;

        fn type_name() -> &'static str {
            "rosplan_knowledge_msgs/srv/KnowledgeUpdateService"
        }
    }

    crate::impl_type_support!(
        KnowledgeUpdateService_Request => "rosplan_knowledge_msgs/srv/KnowledgeUpdateService_Request",
        KnowledgeUpdateService_Response => "rosplan_knowledge_msgs/srv/KnowledgeUpdateService_Response",
    );
}
