use crate::config::Config;
use crate::external::{CollaboratorError, Menu, MenuRequest, Properties};
use crate::model::{Effect, RequestKind};
use crate::operators::{find_operator, prepend_scheme, OperatorContext};
use crate::parser::parse_line;
use crate::store::{validate_entry, Store, StoreError};
use crate::suggestions::{SuggestionIndex, SuggestionMap};
use log::{debug, info, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What a single invocation ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Navigated(String),
    Bookmarked(String),
    Deleted(String),
    NoOp,
}

/// Runs one request end to end against explicit collaborators.
pub struct Dispatcher<'a, M: Menu, P: Properties> {
    pub store: &'a Store,
    pub menu: &'a M,
    pub properties: &'a P,
    pub config: &'a Config,
}

impl<'a, M: Menu, P: Properties> Dispatcher<'a, M, P> {
    pub fn run(&self, kind: RequestKind) -> Result<Outcome, DispatchError> {
        debug!("Dispatching {:?}", kind);
        match kind {
            RequestKind::BookmarkCapture => self.capture_bookmark(),
            RequestKind::RawUri => self.raw_uri(),
            RequestKind::BrowseBookmarks => self.browse_bookmarks(),
            RequestKind::Enhanced => self.enhanced(),
        }
    }

    fn capture_bookmark(&self) -> Result<Outcome, DispatchError> {
        let url = self.current_url()?;
        let glyph = &self.config.general.bookmark_glyph;
        let name = self.menu.prompt(&MenuRequest {
            prompt: self.config.menu.bookmark_name_prompt.clone(),
            candidates: vec![glyph.clone()],
            lines: Some(0),
        })?;

        // Picking the glyph itself stores the bookmark without a name
        let label = Some(name.as_str()).filter(|n| !n.is_empty() && *n != glyph.as_str());
        self.store.upsert(&url, true, label)?;
        info!("Bookmarked {} as {:?}", url, label);
        Ok(Outcome::Bookmarked(url))
    }

    fn raw_uri(&self) -> Result<Outcome, DispatchError> {
        let current = self.current_url()?;
        let line = self.menu.prompt(&MenuRequest {
            prompt: self.config.menu.raw_prompt.clone(),
            candidates: vec![current],
            lines: None,
        })?;
        if line.is_empty() {
            return Ok(Outcome::NoOp);
        }
        self.navigate(&line)
    }

    fn browse_bookmarks(&self) -> Result<Outcome, DispatchError> {
        let mut map = self.index().bookmarks_only()?;
        self.add_current(&mut map)?;
        let value = self.pick(&self.config.menu.bookmarks_prompt, &map)?;
        if value.is_empty() {
            return Ok(Outcome::NoOp);
        }
        self.navigate(&value)
    }

    fn enhanced(&self) -> Result<Outcome, DispatchError> {
        let mut map = self.index().merged()?;
        self.add_current(&mut map)?;
        let value = self.pick(&self.config.menu.enhanced_prompt, &map)?;

        if value.is_empty() {
            debug!("Empty selection");
            return Ok(Outcome::NoOp);
        }

        if !value.contains(' ') {
            let url = prepend_scheme(&value, &self.config.general.default_scheme);
            let record = recordable(&url);
            let outcome = self.navigate(&url)?;
            if record {
                self.store.insert_if_absent(&url, false, None)?;
            }
            return Ok(outcome);
        }

        let command = parse_line(&value);
        let argument = map.resolve(&command.argument);
        debug!("Operator {:?} with argument {:?}", command.operator, argument);

        let effect = match find_operator(&command.operator) {
            Some(operator) => {
                let ctx = OperatorContext {
                    templates: &self.config.operators,
                    default_scheme: &self.config.general.default_scheme,
                };
                let effect = operator.kind.apply(&argument, &ctx);
                info!("{} ({}) -> {:?}", operator.name, operator.shortcut(), effect);
                effect
            }
            None => {
                warn!("No operator matches {:?}", command.operator);
                Effect::NoOp
            }
        };
        self.perform(effect)
    }

    fn perform(&self, effect: Effect) -> Result<Outcome, DispatchError> {
        match effect {
            Effect::Navigate { url, remember } => {
                let remember = remember.filter(|shorthand| recordable(shorthand));
                let outcome = self.navigate(&url)?;
                if let Some(shorthand) = remember {
                    self.store.insert_if_absent(&shorthand, false, None)?;
                }
                Ok(outcome)
            }
            Effect::Delete(value) => {
                if !self.store.delete(&value)? {
                    debug!("Nothing stored under {:?}", value);
                }
                Ok(Outcome::Deleted(value))
            }
            Effect::NoOp => Ok(Outcome::NoOp),
        }
    }

    fn index(&self) -> SuggestionIndex<'_> {
        SuggestionIndex::new(self.store, &self.config.general.bookmark_glyph)
    }

    fn current_url(&self) -> Result<String, CollaboratorError> {
        self.properties.get(&self.config.properties.uri_property)
    }

    fn add_current(&self, map: &mut SuggestionMap) -> Result<(), CollaboratorError> {
        let current = self.current_url()?;
        map.insert(format!("{}{}", self.config.general.current_prefix, current), current);
        Ok(())
    }

    /// Shows the map's labels and returns the picked label's value, or the typed text.
    fn pick(&self, prompt: &str, map: &SuggestionMap) -> Result<String, CollaboratorError> {
        debug!("Offering {} suggestions", map.len());
        let line = self.menu.prompt(&MenuRequest {
            prompt: prompt.to_string(),
            candidates: map.labels().map(str::to_string).collect(),
            lines: None,
        })?;
        Ok(map.resolve(&line))
    }

    fn navigate(&self, url: &str) -> Result<Outcome, DispatchError> {
        self.properties.set(&self.config.properties.go_property, url)?;
        info!("Navigating to {}", url);
        Ok(Outcome::Navigated(url.to_string()))
    }
}

/// Values the store would reject are still navigated to, just not recorded.
fn recordable(value: &str) -> bool {
    match validate_entry(value, None) {
        Ok(()) => true,
        Err(e) => {
            warn!("Not recording: {}", e);
            false
        }
    }
}
