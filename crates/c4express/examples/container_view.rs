use c4express::prelude::*;
use c4express::transform;

fn main() {
    let definition = r#"{
        "elements": [
            {"type": "Person", "name": "Customer", "position": "100,100"},
            {"type": "Software System", "name": "Shop", "containers": [
                {"name": "Web", "technology": "Rust", "position": "100,400"},
                {"name": "Db", "technology": "Postgres", "position": "500,400"}
            ]},
            {"type": "Software System", "name": "Payments", "tags": "External"}
        ],
        "relationships": [
            {"source": "Customer", "destination": "Web", "description": "Browses"},
            {"source": "Web", "destination": "Db", "technology": "SQL"},
            {"source": "Db", "destination": "Payments", "vertices": ["oops"]}
        ],
        "styles": [{"type": "element", "tag": "Person", "shape": "Person", "opacity": "140"}],
        "type": "Container",
        "scope": "Shop",
        "size": "A4_Landscape"
    }"#;

    println!("=== Container view ===");
    let result = transform(definition);
    for (severity, message) in result.messages.iter() {
        println!("{}: {}", severity, message);
    }
    let workspace = result.workspace.unwrap();
    println!("{}", serde_json::to_string_pretty(&workspace).unwrap());

    println!("\n=== Stage by stage ===");
    let decoded = Orchestrator::new().decode(definition).unwrap();
    let mut db = ModelDatabase::new();
    for element in decoded.elements() {
        ElementParser::new().parse(element, &mut db).unwrap();
    }
    for entry in db.elements() {
        println!("{:>2} {:<10} {:?} parent={:?}", entry.id, entry.name, entry.kind, entry.parent_id);
    }
}
