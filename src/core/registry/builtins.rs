//! Registrations of every helper under its template name.

use crate::defaults::DateConfig;
use crate::error::Error;
use crate::list::dynamic as list;
use crate::value::Value;
use crate::{
    coerce, date, dict, empty, encoding, environ, hash, pattern, reflect, slashpath, strings,
    version,
};

use super::Registry;

const HERMETIC: bool = true;
const VOLATILE: bool = false;

pub(super) fn register(r: &mut Registry, dates: &DateConfig) {
    register_numeric(r);
    register_defaults(r);
    register_lists(r);
    register_strings(r);
    register_dicts(r);
    register_dates(r, dates);
    register_encoding(r);
    register_patterns(r);
    register_reflection(r);
    register_versions(r);
    register_system(r);
}

/// Register a helper taking one string argument.
fn unary(r: &mut Registry, name: &'static str, hermetic: bool, f: fn(&str) -> String) {
    r.add(name, hermetic, move |a| Ok(Value::from(f(&a.string(0)?))));
}

/// Register a random-string helper taking a length.
fn random(r: &mut Registry, name: &'static str, f: fn(i64) -> String) {
    r.add(name, VOLATILE, move |a| Ok(Value::from(f(a.int(0)?))));
}

fn register_numeric(r: &mut Registry) {
    r.add("float64", HERMETIC, |a| Ok(Value::from(coerce::to_float64(a.value(0)?))));
    r.add("int64", HERMETIC, |a| Ok(Value::from(coerce::to_int64(a.value(0)?))));
    r.add("int", HERMETIC, |a| Ok(Value::from(coerce::to_int(a.value(0)?))));
    r.add("atoi", HERMETIC, |a| Ok(Value::from(coerce::atoi(&a.string(0)?))));

    for name in ["max", "biggest"] {
        r.add(name, HERMETIC, |a| Ok(Value::from(coerce::max(a.value(0)?, a.rest(1)))));
    }
    r.add("min", HERMETIC, |a| Ok(Value::from(coerce::min(a.value(0)?, a.rest(1)))));

    r.add("until", HERMETIC, |a| Ok(Value::from(coerce::until(a.int(0)?))));
    r.add("untilStep", HERMETIC, |a| {
        Ok(Value::from(coerce::until_step(a.int(0)?, a.int(1)?, a.int(2)?)))
    });

    r.add("floor", HERMETIC, |a| Ok(Value::from(coerce::floor(a.value(0)?))));
    r.add("ceil", HERMETIC, |a| Ok(Value::from(coerce::ceil(a.value(0)?))));
    r.add("round", HERMETIC, |a| {
        let round_on = a.opt(2).map(coerce::to_float64);
        Ok(Value::from(coerce::round(a.value(0)?, a.int(1)?, round_on)))
    });

    r.add("add", HERMETIC, |a| Ok(Value::from(coerce::add(a.rest(0)))));
    r.add("add1", HERMETIC, |a| Ok(Value::from(coerce::add1(a.value(0)?))));
    r.add("sub", HERMETIC, |a| Ok(Value::from(coerce::sub(a.value(0)?, a.value(1)?))));
    r.add("mul", HERMETIC, |a| Ok(Value::from(coerce::mul(a.value(0)?, a.rest(1)))));
    r.add("div", HERMETIC, |a| Ok(Value::from(coerce::div(a.value(0)?, a.value(1)?))));
    r.add("mod", HERMETIC, |a| Ok(Value::from(coerce::modulo(a.value(0)?, a.value(1)?))));
}

fn register_defaults(r: &mut Registry) {
    r.add("default", HERMETIC, |a| Ok(empty::default(a.value(0)?, a.rest(1))));
    r.add("empty", HERMETIC, |a| Ok(Value::from(empty::is_empty(a.value(0)?))));
    r.add("coalesce", HERMETIC, |a| Ok(empty::coalesce(a.rest(0))));
    r.add("ternary", HERMETIC, |a| {
        Ok(empty::ternary(a.value(0)?, a.value(1)?, a.bool(2)?))
    });
    r.add("fail", HERMETIC, |a| Err(Error::function_failed(a.string(0)?)));
}

fn register_lists(r: &mut Registry) {
    r.add("list", HERMETIC, |a| Ok(dict::list(a.rest(0))));
    r.add("first", HERMETIC, |a| list::first(a.value(0)?));
    r.add("last", HERMETIC, |a| list::last(a.value(0)?));
    r.add("rest", HERMETIC, |a| list::rest(a.value(0)?));
    r.add("initial", HERMETIC, |a| list::initial(a.value(0)?));
    r.add("reverse", HERMETIC, |a| list::reverse(a.value(0)?));
    r.add("uniq", HERMETIC, |a| list::uniq(a.value(0)?));
    r.add("compact", HERMETIC, |a| list::compact(a.value(0)?));
    r.add("without", HERMETIC, |a| list::without(a.value(0)?, a.rest(1)));
    r.add("has", HERMETIC, |a| Ok(Value::from(list::has(a.value(0)?, a.value(1)?)?)));
    for name in ["append", "push"] {
        r.add(name, HERMETIC, |a| list::push(a.value(0)?, a.value(1)?.clone()));
    }
    r.add("prepend", HERMETIC, |a| list::prepend(a.value(0)?, a.value(1)?.clone()));
    r.add("slice", HERMETIC, |a| list::slice(a.value(0)?, a.rest(1)));
}

fn register_strings(r: &mut Registry) {
    r.add("toString", HERMETIC, |a| Ok(Value::from(strings::str_val(a.value(0)?))));
    r.add("toStrings", HERMETIC, |a| Ok(Value::from(strings::str_slice(a.value(0)?))));

    r.add("abbrev", HERMETIC, |a| {
        Ok(Value::from(strings::abbrev(a.int(0)?, &a.string(1)?)))
    });
    r.add("abbrevboth", HERMETIC, |a| {
        Ok(Value::from(strings::abbrev_both(a.int(0)?, a.int(1)?, &a.string(2)?)))
    });
    r.add("trunc", HERMETIC, |a| Ok(Value::from(strings::trunc(a.int(0)?, &a.string(1)?))));
    r.add("substr", HERMETIC, |a| {
        Ok(Value::from(strings::substring(a.int(0)?, a.int(1)?, &a.string(2)?)))
    });

    unary(r, "initials", HERMETIC, strings::initials);
    unary(r, "untitle", HERMETIC, strings::untitle);
    unary(r, "title", HERMETIC, strings::title);
    unary(r, "upper", HERMETIC, |s| s.to_uppercase());
    unary(r, "lower", HERMETIC, |s| s.to_lowercase());
    unary(r, "trim", HERMETIC, |s| s.trim().to_string());
    unary(r, "nospace", HERMETIC, strings::nospace);
    unary(r, "swapcase", HERMETIC, strings::swapcase);
    unary(r, "snakecase", HERMETIC, strings::snakecase);
    unary(r, "camelcase", HERMETIC, strings::camelcase);
    unary(r, "kebabcase", HERMETIC, strings::kebabcase);
    unary(r, "shuffle", VOLATILE, strings::shuffle);

    r.add("indent", HERMETIC, |a| {
        Ok(Value::from(strings::indent(a.int(0)?, &a.string(1)?)?))
    });
    r.add("nindent", HERMETIC, |a| {
        Ok(Value::from(strings::nindent(a.int(0)?, &a.string(1)?)?))
    });
    r.add("replace", HERMETIC, |a| {
        Ok(Value::from(strings::replace(&a.string(0)?, &a.string(1)?, &a.string(2)?)))
    });
    r.add("plural", HERMETIC, |a| {
        let (one, many) = (a.string(0)?, a.string(1)?);
        Ok(Value::from(strings::plural(&one, &many, a.int(2)?)))
    });
    r.add("quote", HERMETIC, |a| Ok(Value::from(strings::quote(a.rest(0)))));
    r.add("squote", HERMETIC, |a| Ok(Value::from(strings::squote(a.rest(0)))));
    r.add("cat", HERMETIC, |a| Ok(Value::from(strings::cat(a.rest(0)))));
    r.add("join", HERMETIC, |a| Ok(Value::from(strings::join(&a.string(0)?, a.value(1)?))));

    r.add("split", HERMETIC, |a| Ok(Value::Map(strings::split(&a.string(0)?, &a.string(1)?))));
    r.add("splitn", HERMETIC, |a| {
        Ok(Value::Map(strings::splitn(&a.string(0)?, a.int(1)?, &a.string(2)?)))
    });
    r.add("splitList", HERMETIC, |a| {
        Ok(Value::from(strings::split_list(&a.string(0)?, &a.string(1)?)))
    });
    r.add("repeat", HERMETIC, |a| {
        Ok(Value::from(strings::repeat(a.int(0)?, &a.string(1)?)?))
    });

    for name in ["trimAll", "trimall"] {
        r.add(name, HERMETIC, |a| {
            Ok(Value::from(strings::trim_all(&a.string(0)?, &a.string(1)?)))
        });
    }
    r.add("trimPrefix", HERMETIC, |a| {
        Ok(Value::from(strings::trim_prefix(&a.string(0)?, &a.string(1)?)))
    });
    r.add("trimSuffix", HERMETIC, |a| {
        Ok(Value::from(strings::trim_suffix(&a.string(0)?, &a.string(1)?)))
    });

    r.add("wrap", HERMETIC, |a| Ok(Value::from(strings::wrap(a.int(0)?, &a.string(1)?))));
    r.add("wrapWith", HERMETIC, |a| {
        Ok(Value::from(strings::wrap_with(a.int(0)?, &a.string(1)?, &a.string(2)?)))
    });

    r.add("contains", HERMETIC, |a| {
        Ok(Value::from(a.string(1)?.contains(a.string(0)?.as_str())))
    });
    r.add("hasPrefix", HERMETIC, |a| {
        Ok(Value::from(a.string(1)?.starts_with(a.string(0)?.as_str())))
    });
    r.add("hasSuffix", HERMETIC, |a| {
        Ok(Value::from(a.string(1)?.ends_with(a.string(0)?.as_str())))
    });
    r.add("sortAlpha", HERMETIC, |a| Ok(Value::from(strings::sort_alpha(a.value(0)?))));

    random(r, "randAlphaNum", strings::rand_alpha_num);
    random(r, "randAlpha", strings::rand_alpha);
    random(r, "randAscii", strings::rand_ascii);
    random(r, "randNumeric", strings::rand_numeric);
}

fn register_dicts(r: &mut Registry) {
    r.add("dict", HERMETIC, |a| Ok(Value::Map(dict::dict(a.rest(0)))));
    r.add("set", HERMETIC, |a| {
        Ok(Value::Map(dict::set(a.map(0)?, a.string(1)?, a.value(2)?.clone())))
    });
    r.add("unset", HERMETIC, |a| Ok(Value::Map(dict::unset(a.map(0)?, &a.string(1)?))));
    r.add("hasKey", HERMETIC, |a| {
        Ok(Value::from(dict::has_key(&a.map(0)?, &a.string(1)?)))
    });
    r.add("pluck", HERMETIC, |a| {
        Ok(Value::from(dict::pluck(&a.string(0)?, &a.maps_from(1)?)))
    });
    r.add("keys", HERMETIC, |a| Ok(Value::from(dict::keys(&a.maps_from(0)?))));
    r.add("pick", HERMETIC, |a| {
        Ok(Value::Map(dict::pick(&a.map(0)?, &a.strings_from(1))))
    });
    r.add("omit", HERMETIC, |a| {
        Ok(Value::Map(dict::omit(&a.map(0)?, &a.strings_from(1))))
    });
    r.add("merge", HERMETIC, |a| {
        Ok(Value::Map(dict::merge(a.map(0)?, &a.maps_from(1)?)))
    });
    r.add("values", HERMETIC, |a| Ok(Value::from(dict::values(&a.map(0)?))));
}

fn register_dates(r: &mut Registry, dates: &DateConfig) {
    let zone = dates.zone.clone();
    r.add("date", VOLATILE, move |a| {
        Ok(Value::from(date::date_in_zone(&a.string(0)?, a.value_or_null(1), &zone)))
    });
    for name in ["dateInZone", "date_in_zone"] {
        r.add(name, VOLATILE, |a| {
            Ok(Value::from(date::date_in_zone(
                &a.string(0)?,
                a.value_or_null(1),
                &a.string(2)?,
            )))
        });
    }

    let (zone, html_format) = (dates.zone.clone(), dates.html_format.clone());
    r.add("htmlDate", VOLATILE, move |a| {
        Ok(Value::from(date::date_in_zone(&html_format, a.value_or_null(0), &zone)))
    });
    let html_format = dates.html_format.clone();
    r.add("htmlDateInZone", VOLATILE, move |a| {
        Ok(Value::from(date::date_in_zone(
            &html_format,
            a.value_or_null(0),
            &a.string(1)?,
        )))
    });

    for name in ["dateModify", "date_modify"] {
        r.add(name, HERMETIC, |a| {
            Ok(Value::Time(date::date_modify(&a.string(0)?, a.time(1)?)))
        });
    }
    r.add("ago", VOLATILE, |a| Ok(Value::from(date::date_ago(a.value_or_null(0)))));
    r.add("toDate", HERMETIC, |a| {
        Ok(Value::Time(date::to_date(&a.string(0)?, &a.string(1)?)))
    });
    r.add("now", VOLATILE, |_| Ok(Value::Time(date::now())));
}

fn register_encoding(r: &mut Registry) {
    r.add("toJson", HERMETIC, |a| Ok(Value::from(encoding::to_json(a.value(0)?))));
    r.add("toPrettyJson", HERMETIC, |a| {
        Ok(Value::from(encoding::to_pretty_json(a.value(0)?)))
    });
    unary(r, "b64enc", HERMETIC, encoding::base64_encode);
    unary(r, "b64dec", HERMETIC, encoding::base64_decode);
    unary(r, "b32enc", HERMETIC, encoding::base32_encode);
    unary(r, "b32dec", HERMETIC, encoding::base32_decode);
    r.add("readAsCsv", HERMETIC, |a| {
        Ok(Value::from(encoding::read_as_csv(&a.string(0)?)?))
    });
    r.add("readAsMap", HERMETIC, |a| {
        let entries = encoding::read_as_map(&a.string(0)?)?;
        Ok(Value::Map(
            entries.into_iter().map(|(k, v)| (k, Value::Str(v))).collect(),
        ))
    });
}

fn register_patterns(r: &mut Registry) {
    r.add("regexMatch", HERMETIC, |a| {
        Ok(Value::from(pattern::regex_match(&a.string(0)?, &a.string(1)?)?))
    });
    r.add("regexFind", HERMETIC, |a| {
        Ok(Value::from(pattern::regex_find(&a.string(0)?, &a.string(1)?)?))
    });
    r.add("regexFindAll", HERMETIC, |a| {
        Ok(Value::from(pattern::regex_find_all(&a.string(0)?, &a.string(1)?, a.int(2)?)?))
    });
    r.add("regexReplaceAll", HERMETIC, |a| {
        Ok(Value::from(pattern::regex_replace_all(
            &a.string(0)?,
            &a.string(1)?,
            &a.string(2)?,
        )?))
    });
    r.add("regexReplaceAllLiteral", HERMETIC, |a| {
        Ok(Value::from(pattern::regex_replace_all_literal(
            &a.string(0)?,
            &a.string(1)?,
            &a.string(2)?,
        )?))
    });
    r.add("regexSplit", HERMETIC, |a| {
        Ok(Value::from(pattern::regex_split(&a.string(0)?, &a.string(1)?, a.int(2)?)?))
    });
}

fn register_reflection(r: &mut Registry) {
    r.add("typeOf", HERMETIC, |a| Ok(Value::from(reflect::type_of(a.value(0)?))));
    r.add("typeIs", HERMETIC, |a| {
        Ok(Value::from(reflect::type_is(&a.string(0)?, a.value(1)?)))
    });
    r.add("typeIsLike", HERMETIC, |a| {
        Ok(Value::from(reflect::type_is_like(&a.string(0)?, a.value(1)?)))
    });
    r.add("kindOf", HERMETIC, |a| Ok(Value::from(reflect::kind_of(a.value(0)?))));
    r.add("kindIs", HERMETIC, |a| {
        Ok(Value::from(reflect::kind_is(&a.string(0)?, a.value(1)?)))
    });
}

fn register_versions(r: &mut Registry) {
    r.add("semver", HERMETIC, |a| version::semver(&a.string(0)?));
    r.add("semverCompare", HERMETIC, |a| {
        Ok(Value::from(version::semver_compare(&a.string(0)?, &a.string(1)?)?))
    });
}

fn register_system(r: &mut Registry) {
    unary(r, "sha1sum", HERMETIC, hash::sha1sum);
    unary(r, "sha256sum", HERMETIC, hash::sha256sum);
    unary(r, "adler32sum", HERMETIC, hash::adler32sum);
    r.add("uuidv4", VOLATILE, |_| Ok(Value::from(hash::uuidv4())));

    unary(r, "env", VOLATILE, environ::env);
    r.add("expandenv", VOLATILE, |a| Ok(Value::from(environ::expandenv(&a.string(0)?)?)));

    unary(r, "base", HERMETIC, slashpath::base);
    unary(r, "dir", HERMETIC, slashpath::dir);
    unary(r, "clean", HERMETIC, slashpath::clean);
    unary(r, "ext", HERMETIC, slashpath::ext);
    r.add("isAbs", HERMETIC, |a| Ok(Value::from(slashpath::is_abs(&a.string(0)?))));
}
