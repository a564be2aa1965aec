pub mod ltl {
    pub mod default;
}
