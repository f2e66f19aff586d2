mod link_tab_factory;

pub use link_tab_factory::LinkTabFactory;
