use crate::models::{Kind, Model};

use super::{Catalog, Finding};

/// Scan every in-scope element and dataflow against the catalog.
///
/// Output order is deterministic: elements in declaration order, then flows
/// in declaration order, with catalog order within each target.
pub fn scan(model: &Model, catalog: &Catalog) -> Vec<Finding> {
    let mut findings = Vec::new();

    for element in model.elements() {
        if !element.in_scope() {
            tracing::debug!("skipping out-of-scope element \"{}\"", element.name());
            continue;
        }
        for threat in catalog.threats() {
            if !threat.applies_to(element.kind()) {
                continue;
            }
            if threat.matches(|attr| element.bool_attr(attr)) {
                tracing::debug!("{} applies to \"{}\"", threat.id, element.name());
                findings.push(Finding::record(threat, element.name(), element.kind()));
            }
        }
    }

    for flow in model.dataflows() {
        if !flow.in_scope {
            tracing::debug!("skipping out-of-scope dataflow \"{}\"", flow.label);
            continue;
        }
        for threat in catalog.threats() {
            if !threat.applies_to(Kind::Dataflow) {
                continue;
            }
            if threat.matches(|attr| flow.bool_attr(attr)) {
                tracing::debug!("{} applies to \"{}\"", threat.id, flow.label);
                findings.push(Finding::record(threat, &flow.label, Kind::Dataflow));
            }
        }
    }

    tracing::info!(
        "scanned {} elements and {} dataflows, {} findings",
        model.elements().len(),
        model.dataflows().len(),
        findings.len()
    );

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Actor, Dataflow, Datastore, Server};

    fn scan_with_builtin(model: &Model) -> Vec<Finding> {
        let catalog = Catalog::builtin().expect("built-in catalog is invalid");
        scan(model, &catalog)
    }

    #[test]
    fn test_default_server_triggers_every_server_threat() {
        let mut model = Model::new("Shop", "");
        model.add_server(Server::new("Web"));

        let ids: Vec<String> = scan_with_builtin(&model)
            .into_iter()
            .map(|f| f.threat_id)
            .collect();
        assert_eq!(ids, vec!["SV01", "SV02", "SV03", "SV04"]);
    }

    #[test]
    fn test_hardened_server_is_clean() {
        let mut model = Model::new("Shop", "");
        let mut web = Server::new("Web");
        web.sanitizes_input = true;
        web.authenticates_requests = true;
        web.audit_logging = true;
        web.rate_limited = true;
        model.add_server(web);

        assert!(scan_with_builtin(&model).is_empty());
    }

    #[test]
    fn test_out_of_scope_elements_are_skipped() {
        let mut model = Model::new("Shop", "");
        let mut web = Server::new("Web");
        web.in_scope = false;
        model.add_server(web);

        assert!(scan_with_builtin(&model).is_empty());
    }

    #[test]
    fn test_unencrypted_flow_triggers_transit_threats() {
        let mut model = Model::new("Shop", "");
        let user = model.add_actor(Actor::new("User"));
        let web = model.add_server(Server::new("Web"));
        model
            .add_dataflow(Dataflow::new(user, web, "Login"))
            .expect("flow rejected");

        let flow_findings: Vec<Finding> = scan_with_builtin(&model)
            .into_iter()
            .filter(|f| f.target_kind == Kind::Dataflow)
            .collect();

        let ids: Vec<&str> = flow_findings.iter().map(|f| f.threat_id.as_str()).collect();
        assert_eq!(ids, vec!["DF01", "DF02", "DF03"]);
        assert!(flow_findings.iter().all(|f| f.target == "Login"));
    }

    #[test]
    fn test_protected_flow_is_clean() {
        let mut model = Model::new("Shop", "");
        let user = model.add_actor(Actor::new("User"));
        let web = model.add_server(Server::new("Web"));
        let mut flow = Dataflow::new(user, web, "Login");
        flow.encrypted = true;
        flow.authenticated = true;
        model.add_dataflow(flow).expect("flow rejected");

        let findings = scan_with_builtin(&model);
        assert!(findings.iter().all(|f| f.target_kind != Kind::Dataflow));
    }

    #[test]
    fn test_pii_in_plaintext_store_is_critical() {
        let mut model = Model::new("Shop", "");
        let mut store = Datastore::new("Users");
        store.contains_pii = true;
        model.add_datastore(store);

        let findings = scan_with_builtin(&model);
        assert!(findings.iter().any(|f| f.threat_id == "DS02"));

        let mut model = Model::new("Shop", "");
        let mut store = Datastore::new("Users");
        store.contains_pii = true;
        store.encrypted_at_rest = true;
        model.add_datastore(store);

        let findings = scan_with_builtin(&model);
        assert!(findings.iter().all(|f| f.threat_id != "DS02"));
    }
}
