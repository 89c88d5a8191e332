pub mod cplot;
pub mod datacal;
pub mod fdist;
pub mod force_fst;
pub mod pv;
