// ============================================================================
// Basic Usage Example
// ============================================================================

use ixbrl_factset::prelude::*;

const REPORT: &str = r#"{
    "prefixes": {
        "eg": "http://www.example.com",
        "iso4217": "http://www.xbrl.org/2003/iso4217"
    },
    "concepts": {
        "eg:Revenue": { "labels": { "std": { "en": "Revenue" } } },
        "eg:Profit": { "labels": { "std": { "en": "Operating profit" } } },
        "eg:Segment": { "labels": { "std": { "en": "Segment" } } },
        "eg:Retail": { "labels": { "std": { "en": "Retail" } } },
        "eg:Wholesale": { "labels": { "std": { "en": "Wholesale" } } }
    },
    "facts": {
        "r2018": { "d": -3, "v": 1250000, "a": { "c": "eg:Revenue", "p": "2017-01-01/2018-01-01", "u": "iso4217:GBP" } },
        "r2019": { "d": -3, "v": 1310000, "a": { "c": "eg:Revenue", "p": "2018-01-01/2019-01-01", "u": "iso4217:GBP" } },
        "retail": { "d": -3, "v": 800000, "a": { "c": "eg:Revenue", "p": "2018-01-01/2019-01-01", "u": "iso4217:GBP", "eg:Segment": "eg:Retail" } },
        "wholesale": { "d": -3, "v": 510000, "a": { "c": "eg:Revenue", "p": "2018-01-01/2019-01-01", "u": "iso4217:GBP", "eg:Segment": "eg:Wholesale" } },
        "profit": { "d": -3, "v": 95000, "a": { "c": "eg:Profit", "p": "2018-01-01/2019-01-01", "u": "iso4217:GBP" } },
        "r2019-text": { "d": -3, "v": 1300000, "a": { "c": "eg:Revenue", "p": "2018-01-01/2019-01-01", "u": "iso4217:GBP" } },
        "r2019-table": { "d": -4, "v": 1310000, "a": { "c": "eg:Revenue", "p": "2018-01-01/2019-01-01", "u": "iso4217:GBP" } }
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== iXBRL Fact Set Example ===\n");

    let report = ReportData::from_json(REPORT)?;
    let labels = report.label_dictionary()?;
    let labeller = AspectLabeller::with_defaults(&labels);
    println!("Loaded {} facts\n", report.fact_ids().len());

    let fact = |id: &str| report.fact(&FactId::from(id));

    // Captions for a highlighted group of facts
    let group = [
        fact("r2018")?,
        fact("r2019")?,
        fact("retail")?,
        fact("wholesale")?,
        fact("profit")?,
    ];
    let set = FactSet::new(&group);

    println!("Label aspects: {:?}", set.selected_aspects());
    for (f, label) in set.iter().zip(set.minimally_unique_labels(&labeller)) {
        println!("  {:<10} {}", f.id(), label);
    }

    // Duplicate reports of the same value at different precisions
    println!("\nConsistency checks:");
    let duplicates = [fact("r2019")?, fact("r2019-table")?];
    let set = FactSet::new(&duplicates);
    match set.value_intersection()? {
        Some(range) => println!("  r2019 vs r2019-table: consistent, true value in {}", range),
        None => println!("  r2019 vs r2019-table: inconsistent"),
    }

    let conflicting = [fact("r2019")?, fact("r2019-text")?, fact("r2019-table")?];
    let set = FactSet::new(&conflicting);
    for (f, interval) in set.iter().zip(set.value_intervals()?) {
        println!("  {:<12} {} (decimals {:?})", f.id(), interval, f.decimals());
    }
    println!("  consistent: {}", set.is_consistent()?);

    Ok(())
}
