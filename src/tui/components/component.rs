pub trait Component {
    fn render(&mut self, width: usize) -> Vec<String>;

    /// Drop anything cached from earlier renders.
    fn invalidate(&mut self);
}
