use crate::graph_generation::domain::AdjacencyListing;
use crate::shared::Result;
use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

/// XML namespace of the nuspec packaging schema.
pub(crate) const NUSPEC_NAMESPACE: &str =
    "http://schemas.microsoft.com/packaging/2013/05/nuspec.xsd";

/// File extension of the manifest entry inside a package archive.
pub(crate) const MANIFEST_EXTENSION: &str = ".nuspec";

/// Parses nuspec manifest bytes and appends every dependency declaration
/// to `listing` under `package`.
///
/// `<dependency>` elements are matched at any nesting depth (plain lists
/// and per-framework `<group>` blocks alike) as long as they are bound to
/// the nuspec namespace. Declaration order is preserved and duplicates
/// are kept; the `version` attribute is tolerated and ignored.
///
/// # Errors
/// Returns an error on malformed XML. Everything accumulated into
/// `listing` before the failure is left in place so the caller can keep
/// the partial result.
pub(crate) fn parse_manifest(
    bytes: &[u8],
    package: &str,
    listing: &mut AdjacencyListing,
) -> Result<()> {
    let mut reader = NsReader::from_reader(bytes);
    let mut buf = Vec::new();

    loop {
        let (resolve, event) = reader.read_resolved_event_into(&mut buf)?;
        match event {
            Event::Start(ref element) | Event::Empty(ref element) => {
                if is_dependency_element(&resolve, element) {
                    if let Some(dep_id) = dependency_id(element)? {
                        listing.insert_dependency(package, &dep_id);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Whether the element is a namespace-qualified `<dependency>` declaration.
fn is_dependency_element(resolve: &ResolveResult, element: &BytesStart) -> bool {
    let in_namespace = matches!(
        resolve,
        ResolveResult::Bound(Namespace(ns)) if *ns == NUSPEC_NAMESPACE.as_bytes()
    );
    in_namespace && element.local_name().as_ref() == b"dependency"
}

/// Reads the `id` attribute of a dependency element. Declarations
/// without one carry no usable identifier and are skipped.
fn dependency_id(element: &BytesStart) -> Result<Option<String>> {
    for attr in element.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"id" {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
