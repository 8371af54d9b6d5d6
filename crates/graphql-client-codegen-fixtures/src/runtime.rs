//! Stand-ins for the client runtime that generated code targets.
//!
//! Only the surface generated code touches is provided; nothing here sends
//! requests.

use std::any::Any;
use std::any::TypeId;
use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

pub use graphql_client_codegen_fixtures_macros::selector;

/// Root operation type of a schema which doesn't declare one.
#[derive(Debug)]
pub enum NoOperation {}

#[derive(Debug, Default)]
pub struct QueryPipeline;

#[derive(Debug)]
pub struct Transport {
    endpoint: String,
}
impl Transport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

pub struct Client<TQuery, TMutation> {
    pipeline: Option<QueryPipeline>,
    roots: PhantomData<fn() -> (TQuery, TMutation)>,
    transport: Transport,
}
impl<TQuery, TMutation> Client<TQuery, TMutation> {
    pub fn new(transport: Transport, pipeline: Option<QueryPipeline>) -> Self {
        Self {
            pipeline,
            roots: PhantomData,
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        self.transport.endpoint.as_str()
    }

    pub fn has_pipeline(&self) -> bool {
        self.pipeline.is_some()
    }
}

struct EnumTables<E> {
    member_to_wire: HashMap<E, &'static str>,
    wire_to_member: HashMap<&'static str, E>,
}

/// Wire-name conversion tables of every registered enum, keyed by the enum's
/// type.
#[derive(Default)]
pub struct EnumConverterRegistry {
    tables: HashMap<TypeId, Box<dyn Any>>,
}
impl EnumConverterRegistry {
    pub fn register<E: Copy + Eq + Hash + 'static>(
        &mut self,
        wire_to_member: HashMap<&'static str, E>,
        member_to_wire: HashMap<E, &'static str>,
    ) {
        self.tables.insert(TypeId::of::<E>(), Box::new(EnumTables {
            member_to_wire,
            wire_to_member,
        }));
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn to_member<E: Copy + Eq + Hash + 'static>(&self, wire_name: &str) -> Option<E> {
        self.tables_for::<E>()?.wire_to_member.get(wire_name).copied()
    }

    pub fn to_wire<E: Copy + Eq + Hash + 'static>(&self, member: E) -> Option<&'static str> {
        self.tables_for::<E>()?.member_to_wire.get(&member).copied()
    }

    fn tables_for<E: 'static>(&self) -> Option<&EnumTables<E>> {
        self.tables.get(&TypeId::of::<E>())?.downcast_ref::<EnumTables<E>>()
    }
}
