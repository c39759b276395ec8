//! The Portfolio App threat model.
//!
//! One external user reaches a web tier, which calls an API tier, which
//! queries the database. All security attributes are left at their defaults,
//! so analysis reports the worst-case finding set for the chain.

use threatmark_core::{Actor, Dataflow, Datastore, Model, Result, Server};

/// Build the Portfolio App model: four elements, three flows in a chain.
///
/// Pure construction; nothing here triggers processing.
pub fn model() -> Result<Model> {
    let mut model = Model::new("Portfolio App", "Portfolio virtual module threat model");

    let user = model.add_actor(Actor::new("User"));
    let web = model.add_server(Server::new("Web Server"));
    let api = model.add_server(Server::new("API Server"));
    let db = model.add_datastore(Datastore::new("Database"));

    model.add_dataflow(Dataflow::new(user, web, "HTTPS Request"))?;
    model.add_dataflow(Dataflow::new(web, api, "API Call"))?;
    model.add_dataflow(Dataflow::new(api, db, "Query"))?;

    Ok(model)
}
