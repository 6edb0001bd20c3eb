pub mod gravsim_vis2d;
