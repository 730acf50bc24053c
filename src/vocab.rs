//! XSD datatype IRIs used to tag literal nodes.

/// xsd:string
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// xsd:integer
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

/// xsd:unsignedLong
pub const XSD_UNSIGNED_LONG: &str = "http://www.w3.org/2001/XMLSchema#unsignedLong";

/// xsd:boolean
pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

/// xsd:double
pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
