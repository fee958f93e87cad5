pub mod select;
pub mod unionfind;
pub mod spanning;
pub mod paths;
pub mod kruskal;
pub mod prim;
pub mod dijkstra;
