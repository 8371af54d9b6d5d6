/// A line/column position within the SDL text handed to the generator.
///
/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), but owned by
/// this crate so that errors don't leak parser types.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SourcePosition {
    pub col: usize,
    pub line: usize,
}
impl SourcePosition {
    pub(crate) fn from_pos(pos: graphql_parser::Pos) -> Self {
        Self {
            col: pos.column,
            line: pos.line,
        }
    }
}
impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
