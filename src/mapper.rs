//! Plan execution
//!
//! Interprets a mapping plan against one record instance, emitting triples
//! in the plan's declared order.

use crate::adapter::{AdapterResult, NodeAdapter};
use crate::plan::MappingPlan;
use crate::record::RdfRecord;
use crate::term::Triple;
use tracing::trace;

/// Ready-to-run mapper for one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMapper {
    plan: MappingPlan,
}

impl RecordMapper {
    /// Wrap an extracted plan for execution
    pub fn new(plan: MappingPlan) -> Self {
        Self { plan }
    }

    /// The plan this mapper executes
    pub fn plan(&self) -> &MappingPlan {
        &self.plan
    }

    /// Produce the triples for one instance.
    ///
    /// One pass over the record's field values, in declaration order, never
    /// recursing into nested values. Any adapter failure aborts the whole
    /// call; a partial triple set is never returned.
    pub fn run(
        &self,
        record: &dyn RdfRecord,
        adapter: &dyn NodeAdapter,
    ) -> AdapterResult<Vec<Triple>> {
        let values = record.values();

        let subject_iri = format!(
            "{}{}",
            self.plan.subject.prefix,
            values[self.plan.subject.index].lexical()
        );
        let subject = adapter.uri_node(&subject_iri)?;

        let mut triples = Vec::with_capacity(self.plan.objects.len());
        for object in &self.plan.objects {
            let predicate = adapter.uri_node(object.predicate)?;
            let literal = adapter.literal_node(&values[object.index])?;
            triples.push(Triple::new(subject.clone(), predicate, literal));
        }

        trace!(
            type_name = self.plan.type_name,
            triples = triples.len(),
            "mapped record"
        );
        Ok(triples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{AdapterError, XsdNodeAdapter};
    use crate::rdf_record;
    use crate::value::ValueKind;

    struct Track {
        id: String,
        title: String,
        plays: u64,
    }

    rdf_record! {
        Track {
            subject id, prefix = "http://example.org/track/";
            object title, predicate = "http://example.org/hasTitle";
            object plays, predicate = "http://example.org/playCount";
        }
    }

    fn mapper_for(record: &dyn RdfRecord) -> RecordMapper {
        RecordMapper::new(MappingPlan::extract(record.type_name(), record.fields()).unwrap())
    }

    #[test]
    fn test_run_emits_in_declaration_order() {
        let track = Track {
            id: "7".into(),
            title: "Koyaanisqatsi".into(),
            plays: 3,
        };
        let adapter = XsdNodeAdapter::new();
        let triples = mapper_for(&track).run(&track, &adapter).unwrap();

        assert_eq!(triples.len(), 2);
        assert_eq!(
            triples[0].predicate.as_uri().unwrap().as_str(),
            "http://example.org/hasTitle"
        );
        assert_eq!(
            triples[1].predicate.as_uri().unwrap().as_str(),
            "http://example.org/playCount"
        );
    }

    #[test]
    fn test_run_builds_subject_from_prefix_and_value() {
        let track = Track {
            id: "7".into(),
            title: "t".into(),
            plays: 0,
        };
        let adapter = XsdNodeAdapter::new();
        let triples = mapper_for(&track).run(&track, &adapter).unwrap();

        for triple in &triples {
            assert_eq!(
                triple.subject.as_uri().unwrap().as_str(),
                "http://example.org/track/7"
            );
        }
    }

    #[test]
    fn test_adapter_failure_aborts_whole_call() {
        struct Mixed {
            id: String,
            label: String,
            ratio: f64,
        }

        rdf_record! {
            Mixed {
                subject id, prefix = "http://example.org/mixed/";
                object label, predicate = "http://example.org/hasLabel";
                object ratio, predicate = "http://example.org/hasRatio";
            }
        }

        let mixed = Mixed {
            id: "1".into(),
            label: "fine".into(),
            ratio: 0.5,
        };
        let adapter = XsdNodeAdapter::new();
        let err = mapper_for(&mixed).run(&mixed, &adapter).unwrap_err();

        // The first object field converts cleanly, but nothing of it leaks
        // out once the second one fails.
        assert_eq!(err, AdapterError::UnsupportedType(ValueKind::Float));
    }
}
