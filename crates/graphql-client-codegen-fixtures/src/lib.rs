//! A client generated at build time from `schema/fixture.graphqls`, compiled
//! against the stand-in [`runtime`].

pub mod runtime;

pub mod api {
    include!(concat!(env!("OUT_DIR"), "/fixture_client.rs"));
}
