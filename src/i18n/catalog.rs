//! Validation message catalogs.
//!
//! Every locale carries the same keys as English. Placeholders use `{name}`.

use super::Locale;

pub(crate) const EN: &[(&str, &str)] = &[
    ("integer", "Please enter an integer value"),
    ("too_low", "Please enter a number that is {min} or greater"),
    ("too_high", "Please enter a number that is {max} or smaller"),
    ("number", "Please enter a number"),
    ("too_short", "Enter a value {min} characters long or more"),
    ("too_long", "Enter a value less than {max} characters long"),
    ("empty", "Please enter a value"),
    ("email_no_at", "An email address must contain a single @"),
    (
        "email_bad_username",
        "The username portion of the email address is invalid (the portion before the @: {username})",
    ),
    (
        "email_bad_domain",
        "The domain portion of the email address is invalid (the portion after the @: {domain})",
    ),
    ("email_empty", "Please enter an email address"),
    ("not_in", "Value must be one of: {items}"),
    ("bool", "Value should be true or false"),
    ("pattern", "The input is not valid"),
    ("bad_date", "Please enter the date in the form {format}"),
    ("fields_mismatch", "Fields do not match"),
    ("require_if_present", "You must give a value for {required}"),
    ("missing_value", "Missing value"),
    ("not_expected", "The input field {name} was not expected."),
    ("bad_type", "The input must be a string (got {kind})"),
];

pub(crate) const RU: &[(&str, &str)] = &[
    ("integer", "Введите числовое значение"),
    ("too_low", "Введите число, большее или равное {min}"),
    ("too_high", "Введите число, меньшее или равное {max}"),
    ("number", "Введите число"),
    ("too_short", "Введите значение длиной не менее {min} символов"),
    ("too_long", "Введите значение длиной менее {max} символов"),
    ("empty", "Необходимо ввести значение"),
    ("email_no_at", "Адрес электронной почты должен содержать один символ @"),
    (
        "email_bad_username",
        "Неверное имя пользователя в адресе электронной почты (часть перед @: {username})",
    ),
    (
        "email_bad_domain",
        "Неверный домен в адресе электронной почты (часть после @: {domain})",
    ),
    ("email_empty", "Введите адрес электронной почты"),
    ("not_in", "Значение должно быть одним из: {items}"),
    ("bool", "Значение должно быть истинным или ложным"),
    ("pattern", "Недопустимое значение"),
    ("bad_date", "Введите дату в формате {format}"),
    ("fields_mismatch", "Поля не совпадают"),
    ("require_if_present", "Необходимо ввести значение для {required}"),
    ("missing_value", "Отсутствует значение"),
    ("not_expected", "Поле ввода {name} не ожидалось."),
    ("bad_type", "Значение должно быть строкой (получено: {kind})"),
];

pub(crate) const DE: &[(&str, &str)] = &[
    ("integer", "Bitte eine ganze Zahl eingeben"),
    ("too_low", "Bitte eine Zahl größer oder gleich {min} eingeben"),
    ("too_high", "Bitte eine Zahl kleiner oder gleich {max} eingeben"),
    ("number", "Bitte eine Zahl eingeben"),
    ("too_short", "Bitte einen Wert mit mindestens {min} Zeichen eingeben"),
    ("too_long", "Bitte einen Wert mit weniger als {max} Zeichen eingeben"),
    ("empty", "Bitte einen Wert eingeben"),
    ("email_no_at", "Eine E-Mail-Adresse muss genau ein @ enthalten"),
    (
        "email_bad_username",
        "Der Benutzername der E-Mail-Adresse ist ungültig (der Teil vor dem @: {username})",
    ),
    (
        "email_bad_domain",
        "Die Domain der E-Mail-Adresse ist ungültig (der Teil nach dem @: {domain})",
    ),
    ("email_empty", "Bitte eine E-Mail-Adresse eingeben"),
    ("not_in", "Der Wert muss einer der folgenden sein: {items}"),
    ("bool", "Der Wert muss wahr oder falsch sein"),
    ("pattern", "Die Eingabe ist ungültig"),
    ("bad_date", "Bitte das Datum im Format {format} eingeben"),
    ("fields_mismatch", "Die Felder stimmen nicht überein"),
    ("require_if_present", "Bitte einen Wert für {required} angeben"),
    ("missing_value", "Fehlender Wert"),
    ("not_expected", "Das Eingabefeld {name} wurde nicht erwartet."),
    ("bad_type", "Die Eingabe muss eine Zeichenkette sein (erhalten: {kind})"),
];

/// Raw catalog entries for a locale, in declaration order.
pub fn catalog_entries_for(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => EN,
        Locale::Ru => RU,
        Locale::De => DE,
    }
}
