//! Reader for the vacancy feed's XML export (`<oferta>` elements).
//!
//! Offers may sit at any depth. Each direct child of an `<oferta>` is a field
//! whose text (and CDATA) is collected; nested markup inside a field is
//! flattened into that field's text.

use std::collections::HashMap;
use std::io::Read;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::{FeedError, FeedSource, Offer};

const OFFER_TAG: &str = "oferta";

/// An XML export read from any [`Read`] source.
pub struct XmlFeed<R> {
    source: R,
}

impl<R: Read> XmlFeed<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }
}

impl<R: Read> FeedSource for XmlFeed<R> {
    fn offers(mut self) -> Result<Vec<Offer>, FeedError> {
        let mut xml = String::new();
        self.source.read_to_string(&mut xml)?;
        parse_offers(&xml)
    }
}

/// Parse every `<oferta>` in `xml`, in document order.
pub fn parse_offers(xml: &str) -> Result<Vec<Offer>, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut offers = Vec::new();
    let mut buf = Vec::new();

    // Fields of the offer being read; `None` outside an `<oferta>`.
    let mut current: Option<HashMap<String, String>> = None;
    let mut field: Option<String> = None;
    let mut depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                if current.is_none() {
                    if name == OFFER_TAG {
                        current = Some(HashMap::new());
                        depth = 0;
                    }
                } else {
                    depth += 1;
                    if depth == 1 {
                        field = Some(name);
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                if current.is_none() && e.local_name().as_ref() == OFFER_TAG.as_bytes() {
                    offers.push(to_offer(HashMap::new())?);
                }
            }
            Ok(Event::End(_)) => {
                if depth == 0 {
                    if let Some(fields) = current.take() {
                        offers.push(to_offer(fields)?);
                    }
                } else {
                    depth -= 1;
                    if depth == 0 {
                        field = None;
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if let (Some(fields), Some(name)) = (current.as_mut(), field.as_ref()) {
                    let text = e.unescape().map_err(|err| FeedError::Xml {
                        position: reader.buffer_position(),
                        message: err.to_string(),
                    })?;
                    append(fields, name, &text);
                }
            }
            Ok(Event::CData(e)) => {
                if let (Some(fields), Some(name)) = (current.as_mut(), field.as_ref()) {
                    append(fields, name, &String::from_utf8_lossy(&e));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(FeedError::Xml {
                    position: reader.error_position(),
                    message: e.to_string(),
                });
            }
            _ => {}
        }
        buf.clear();
    }

    if current.is_some() {
        return Err(FeedError::Xml {
            position: reader.buffer_position(),
            message: format!("unclosed <{OFFER_TAG}> at end of document"),
        });
    }

    tracing::debug!(offers = offers.len(), "feed: parsed XML export");
    Ok(offers)
}

fn append(fields: &mut HashMap<String, String>, name: &str, text: &str) {
    let slot = fields.entry(name.to_string()).or_default();
    if !slot.is_empty() {
        slot.push(' ');
    }
    slot.push_str(text);
}

fn to_offer(mut fields: HashMap<String, String>) -> Result<Offer, FeedError> {
    let mut take = |key: &str| fields.remove(key).map(|v| v.trim().to_string()).unwrap_or_default();

    let vacancies_raw = take("liczba_stanowisk_pracy");
    let vacancies = if vacancies_raw.is_empty() {
        1
    } else {
        vacancies_raw
            .parse::<u32>()
            .map_err(|_| FeedError::Vacancies(vacancies_raw.clone()))?
    };

    Ok(Offer {
        position: take("stanowisko"),
        duties: take("do_spraw"),
        employer: take("nazwa_firmy"),
        unit: take("komorka_organizacyjna"),
        location: take("miejsce_wykonywania_pracy"),
        workload: take("wymiaretatu"),
        vacancies,
        salary: take("wynagrodzenie"),
        url: take("url"),
        published: take("data_wprowadzenia"),
    })
}
