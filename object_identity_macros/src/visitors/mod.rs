pub mod interface_visitor;
pub mod model_visitor;
