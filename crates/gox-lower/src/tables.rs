//! Name tables used when lowering template tags and attributes.
//!
//! The tables are plain data. Lookups are exact string matches; a miss is
//! never an error, each table documents what happens on a miss.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::borrow::Cow;

/// Identifiers of the core package API the lowered code calls.
pub mod names {
    /// `vecty.Text(s)`
    pub const TEXT: &str = "Text";
    /// `vecty.Markup(...)`
    pub const MARKUP: &str = "Markup";
    /// `vecty.Class(...)`
    pub const CLASS: &str = "Class";
    /// `vecty.Attribute(name, value)`
    pub const ATTRIBUTE: &str = "Attribute";
    /// `&vecty.EventListener{...}`
    pub const EVENT_LISTENER: &str = "EventListener";
    /// Event name field of `EventListener`.
    pub const LISTENER_NAME: &str = "Name";
    /// Handler field of `EventListener`.
    pub const LISTENER_FUNC: &str = "Listener";
    /// The attribute lowered to a class markup directive.
    pub const CLASS_ATTR: &str = "class";
}

/// HTML tags whose element constructor is not just the capitalized tag.
pub const ELEMENT_NAMES: &[(&str, &str)] = &[
    ("a", "Anchor"),
    ("abbr", "Abbreviation"),
    ("b", "Bold"),
    ("bdi", "BidirectionalIsolation"),
    ("bdo", "BidirectionalOverride"),
    ("blockquote", "BlockQuote"),
    ("br", "Break"),
    ("cite", "Citation"),
    ("col", "Column"),
    ("colgroup", "ColumnGroup"),
    ("datalist", "DataList"),
    ("dd", "Description"),
    ("del", "DeletedText"),
    ("dfn", "Definition"),
    ("dl", "DescriptionList"),
    ("dt", "DefinitionTerm"),
    ("em", "Emphasis"),
    ("fieldset", "FieldSet"),
    ("figcaption", "FigureCaption"),
    ("h1", "Heading1"),
    ("h2", "Heading2"),
    ("h3", "Heading3"),
    ("h4", "Heading4"),
    ("h5", "Heading5"),
    ("h6", "Heading6"),
    ("hgroup", "HeadingsGroup"),
    ("hr", "HorizontalRule"),
    ("i", "Italic"),
    ("iframe", "InlineFrame"),
    ("img", "Image"),
    ("ins", "InsertedText"),
    ("kbd", "KeyboardInput"),
    ("li", "ListItem"),
    ("menuitem", "MenuItem"),
    ("nav", "Navigation"),
    ("noframes", "NoFrames"),
    ("noscript", "NoScript"),
    ("ol", "OrderedList"),
    ("optgroup", "OptionsGroup"),
    ("p", "Paragraph"),
    ("param", "Parameter"),
    ("pre", "Preformatted"),
    ("q", "Quote"),
    ("rp", "RubyParenthesis"),
    ("rt", "RubyText"),
    ("rtc", "RubyTextContainer"),
    ("s", "Strikethrough"),
    ("samp", "Sample"),
    ("sub", "Subscript"),
    ("sup", "Superscript"),
    ("tbody", "TableBody"),
    ("textarea", "TextArea"),
    ("td", "TableData"),
    ("tfoot", "TableFoot"),
    ("th", "TableHeader"),
    ("thead", "TableHead"),
    ("tr", "TableRow"),
    ("u", "Underline"),
    ("ul", "UnorderedList"),
    ("var", "Variable"),
    ("wbr", "WordBreakOpportunity"),
];

/// Event attributes and the DOM event each one listens for.
pub const EVENT_NAMES: &[(&str, &str)] = &[
    ("onAbort", "abort"),
    ("onCancel", "cancel"),
    ("onCanPlay", "canplay"),
    ("onCanPlaythrough", "canplaythrough"),
    ("onChange", "change"),
    ("onClick", "click"),
    ("onCueChange", "cuechange"),
    ("onDblClick", "dblclick"),
    ("onDurationChange", "durationchange"),
    ("onEmptied", "emptied"),
    ("onEnded", "ended"),
    ("onInput", "input"),
    ("onInvalid", "invalid"),
    ("onKeyDown", "keydown"),
    ("onKeyPress", "keypress"),
    ("onKeyUp", "keyup"),
    ("onLoadedData", "loadeddata"),
    ("onLoadedMetadata", "loadedmetadata"),
    ("onLoadStart", "loadstart"),
    ("onMouseDown", "mousedown"),
    ("onMouseEnter", "mouseenter"),
    ("onMouseLeave", "mouseleave"),
    ("onMouseleave", "mouseleave"),
    ("onMouseMove", "mousemove"),
    ("onMouseOut", "mouseout"),
    ("onMouseOver", "mouseover"),
    ("onMouseUp", "mouseup"),
    ("onMouseWheel", "mousewheel"),
    ("onPause", "pause"),
    ("onPlay", "play"),
    ("onPlaying", "playing"),
    ("onProgress", "progress"),
    ("onRateChange", "ratechange"),
    ("onReset", "reset"),
    ("onSeeked", "seeked"),
    ("onSeeking", "seeking"),
    ("onSelect", "select"),
    ("onShow", "show"),
    ("onStalled", "stalled"),
    ("onSubmit", "submit"),
    ("onSuspend", "suspend"),
    ("onTimeUpdate", "timeupdate"),
    ("onToggle", "toggle"),
    ("onVolumeChange", "volumechange"),
    ("onWaiting", "waiting"),
];

/// Attributes set through a controlled property instead of `Attribute`.
pub const CONTROLLED_PROPERTIES: &[(&str, &str)] = &[
    ("autofocus", "autofocus"),
    ("checked", "checked"),
    ("for", "htmlFor"),
    ("href", "href"),
    ("id", "id"),
    ("placeholder", "placeholder"),
    ("src", "src"),
    ("type", "type"),
    ("value", "value"),
];

static ELEMENT_TABLE: Lazy<FxHashMap<&'static str, &'static str>> =
    Lazy::new(|| ELEMENT_NAMES.iter().copied().collect());

static EVENT_TABLE: Lazy<FxHashMap<&'static str, &'static str>> =
    Lazy::new(|| EVENT_NAMES.iter().copied().collect());

static CONTROLLED_TABLE: Lazy<FxHashMap<&'static str, &'static str>> =
    Lazy::new(|| CONTROLLED_PROPERTIES.iter().copied().collect());

/// The element constructor for an HTML tag.
///
/// Tags missing from [`ELEMENT_NAMES`] get their first character uppercased
/// (`div` becomes `Div`).
pub fn element_name(tag: &str) -> Cow<'static, str> {
    match ELEMENT_TABLE.get(tag) {
        Some(name) => Cow::Borrowed(*name),
        None => Cow::Owned(capitalize(tag)),
    }
}

/// The DOM event for an event attribute, `None` if the attribute is not one.
pub fn event_name(attr: &str) -> Option<&'static str> {
    EVENT_TABLE.get(attr).copied()
}

/// The property name for a controlled attribute, `None` if it is not one.
pub fn controlled_property(attr: &str) -> Option<&'static str> {
    CONTROLLED_TABLE.get(attr).copied()
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
