pub mod gradient_edit;
