use indexmap::IndexMap;

/// Name given to the generated root client type when none is configured.
pub const DEFAULT_CLIENT_NAME: &str = "GraphQLClient";

/// Path to the crate providing the client runtime (`Client`, `NoOperation`,
/// `EnumConverterRegistry` and the `selector` marker attribute).
pub const DEFAULT_RUNTIME_CRATE: &str = "graphql_client_runtime";

/// Parameters of one generation run.
#[derive(Clone, Debug, PartialEq)]
pub struct CodegenOptions {
    client_name: Option<String>,
    namespace: String,
    runtime_crate: String,
    scalar_types: IndexMap<String, String>,
}
impl CodegenOptions {
    /// Options targeting the given namespace.
    ///
    /// The namespace is a `::` (or `.`) separated module path which the
    /// generated items are nested in. An empty namespace emits the items at
    /// the top level of the generated file.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            client_name: None,
            namespace: namespace.into(),
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_string(),
            scalar_types: IndexMap::new(),
        }
    }

    pub fn client_name(&self) -> &str {
        self.client_name.as_deref().unwrap_or(DEFAULT_CLIENT_NAME)
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_str()
    }

    pub fn runtime_crate(&self) -> &str {
        self.runtime_crate.as_str()
    }

    /// The Rust type configured for a custom GraphQL scalar, if any.
    pub fn scalar_type(&self, scalar_name: &str) -> Option<&str> {
        self.scalar_types.get(scalar_name).map(String::as_str)
    }

    pub fn with_client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = Some(client_name.into());
        self
    }

    pub fn with_runtime_crate(mut self, runtime_crate: impl Into<String>) -> Self {
        self.runtime_crate = runtime_crate.into();
        self
    }

    /// Maps a custom GraphQL scalar onto a Rust type (e.g.
    /// `DateTime` => `chrono::DateTime<chrono::Utc>`).
    ///
    /// Custom scalars without a mapping are represented as `String`.
    pub fn with_scalar_type(
        mut self,
        scalar_name: impl Into<String>,
        rust_type: impl Into<String>,
    ) -> Self {
        self.scalar_types.insert(scalar_name.into(), rust_type.into());
        self
    }
}
impl std::default::Default for CodegenOptions {
    fn default() -> Self {
        Self::new("")
    }
}
