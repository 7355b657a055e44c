pub mod radial_graph;
pub mod sortable_list;
