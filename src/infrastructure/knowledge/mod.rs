mod static_knowledge_base;

pub use static_knowledge_base::StaticKnowledgeBase;
