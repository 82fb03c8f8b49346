pub trait Transform {
    type Output;

    fn apply(content: &str) -> Self::Output;
}
