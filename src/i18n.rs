use crate::domain::language::Language;

pub const APP_TITLE: &str = "WikiBrowse";

/// Shown on the landing page, identical for every language.
pub const EXAMPLE_SEARCHES: [&str; 5] = [
    "React (JavaScript library)",
    "Next.js",
    "TypeScript",
    "Wikipedia",
    "Tailwind CSS",
];

#[derive(Debug, PartialEq, Eq)]
pub struct Strings {
    pub placeholder: &'static str,
    pub welcome: &'static str,
    pub description: &'static str,
    pub example_search: &'static str,
    pub results_title: &'static str,
    pub references_title: &'static str,
    pub loading: &'static str,
    pub error_message: &'static str,
    pub no_results: &'static str,
    pub no_description: &'static str,
    pub empty_query: &'static str,
    /// Label for the PgUp/PgDn hint under the article.
    pub scroll_hint: &'static str,
}

#[must_use]
pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Es => &ES,
        Language::Zh => &ZH,
        Language::Hi => &HI,
        Language::Ar => &AR,
        Language::Pt => &PT,
        Language::Bn => &BN,
        Language::Ru => &RU,
        Language::Ja => &JA,
        Language::De => &DE,
        Language::Ko => &KO,
        Language::Fr => &FR,
        Language::It => &IT,
        Language::Pl => &PL,
        Language::Uk => &UK,
        Language::Ro => &RO,
        Language::Tr => &TR,
        Language::Fa => &FA,
        Language::Sv => &SV,
        Language::Fi => &FI,
    }
}

static EN: Strings = Strings {
    placeholder: "Enter a search term",
    welcome: "Welcome to WikiBrowse!",
    description: "WikiBrowse is a browser based off of Wikipedia that helps you find information quickly.",
    example_search: "Start by typing a search term or try one of these example search terms:",
    results_title: "Results:",
    references_title: "References:",
    loading: "Loading...",
    error_message: "Something went wrong. Please try again.",
    no_results: "No results found.",
    no_description: "No description available.",
    empty_query: "Please enter a search term.",
    scroll_hint: "scroll",
};

static ES: Strings = Strings {
    placeholder: "Introduce un término de búsqueda",
    welcome: "¡Bienvenido a WikiBrowse!",
    description: "WikiBrowse es un navegador basado en Wikipedia que te ayuda a encontrar información rápidamente.",
    example_search: "Comienza escribiendo un término de búsqueda o prueba uno de estos ejemplos de búsqueda:",
    results_title: "Resultados:",
    references_title: "Referencias:",
    loading: "Cargando...",
    error_message: "Algo salió mal. Por favor, inténtalo de nuevo.",
    no_results: "No se encontraron resultados.",
    no_description: "No hay descripción disponible.",
    empty_query: "Por favor, introduce un término de búsqueda.",
    scroll_hint: "desplazar",
};

static ZH: Strings = Strings {
    placeholder: "输入搜索词",
    welcome: "欢迎使用WikiBrowse！",
    description: "WikiBrowse是一个基于Wikipedia的浏览器，帮助你快速查找信息。",
    example_search: "开始输入搜索词，或尝试以下示例搜索词：",
    results_title: "结果：",
    references_title: "参考资料：",
    loading: "加载中...",
    error_message: "出了点问题，请重试。",
    no_results: "没有找到结果。",
    no_description: "没有描述。",
    empty_query: "请输入搜索词。",
    scroll_hint: "滚动",
};

static HI: Strings = Strings {
    placeholder: "एक खोज शब्द दर्ज करें",
    welcome: "WikiBrowse में आपका स्वागत है!",
    description: "WikiBrowse एक ब्राउज़र है जो Wikipedia पर आधारित है और आपको जल्दी से जानकारी खोजने में मदद करता है।",
    example_search: "खोज शब्द टाइप करना शुरू करें या इनमें से कोई एक उदाहरण खोज शब्द आज़माएं:",
    results_title: "परिणाम:",
    references_title: "संदर्भ:",
    loading: "लोड हो रहा है...",
    error_message: "कुछ गलत हो गया। कृपया फिर से प्रयास करें।",
    no_results: "कोई परिणाम नहीं मिला।",
    no_description: "कोई विवरण उपलब्ध नहीं है।",
    empty_query: "कृपया एक खोज शब्द दर्ज करें।",
    scroll_hint: "स्क्रॉल",
};

static AR: Strings = Strings {
    placeholder: "أدخل مصطلح البحث",
    welcome: "مرحبًا بك في WikiBrowse!",
    description: "WikiBrowse هو متصفح يعتمد على ويكيبيديا يساعدك في العثور على المعلومات بسرعة.",
    example_search: "ابدأ بكتابة مصطلح البحث أو جرب أحد مصطلحات البحث التالية:",
    results_title: "النتائج:",
    references_title: "المراجع:",
    loading: "جاري التحميل...",
    error_message: "حدث خطأ ما. يرجى المحاولة مرة أخرى.",
    no_results: "لم يتم العثور على نتائج.",
    no_description: "لا يوجد وصف متاح.",
    empty_query: "يرجى إدخال مصطلح البحث.",
    scroll_hint: "تمرير",
};

static PT: Strings = Strings {
    placeholder: "Digite um termo de pesquisa",
    welcome: "Bem-vindo ao WikiBrowse!",
    description: "O WikiBrowse é um navegador baseado na Wikipedia que ajuda você a encontrar informações rapidamente.",
    example_search: "Comece digitando um termo de pesquisa ou experimente um dos seguintes exemplos de termos de pesquisa:",
    results_title: "Resultados:",
    references_title: "Referências:",
    loading: "Carregando...",
    error_message: "Algo deu errado. Tente novamente.",
    no_results: "Nenhum resultado encontrado.",
    no_description: "Nenhuma descrição disponível.",
    empty_query: "Por favor, digite um termo de pesquisa.",
    scroll_hint: "rolar",
};

static BN: Strings = Strings {
    placeholder: "একটি অনুসন্ধান শব্দ লিখুন",
    welcome: "WikiBrowse-এ স্বাগতম!",
    description: "WikiBrowse একটি ব্রাউজার যা Wikipedia-তে ভিত্তি করে এবং আপনাকে দ্রুত তথ্য খুঁজে পেতে সহায়ক।",
    example_search: "একটি অনুসন্ধান শব্দ লিখতে শুরু করুন অথবা এই উদাহরণ অনুসন্ধান শব্দগুলির মধ্যে একটি চেষ্টা করুন:",
    results_title: "ফলাফল:",
    references_title: "তথ্যসূত্র:",
    loading: "লোড হচ্ছে...",
    error_message: "কিছু ভুল হয়েছে। অনুগ্রহ করে আবার চেষ্টা করুন।",
    no_results: "কোনো ফলাফল পাওয়া যায়নি।",
    no_description: "কোনো বিবরণ পাওয়া যায়নি।",
    empty_query: "অনুগ্রহ করে একটি অনুসন্ধান শব্দ লিখুন।",
    scroll_hint: "স্ক্রল",
};

static RU: Strings = Strings {
    placeholder: "Введите поисковый запрос",
    welcome: "Добро пожаловать в WikiBrowse!",
    description: "WikiBrowse — это браузер, основанный на Википедии, который помогает быстро находить информацию.",
    example_search: "Начните вводить поисковый запрос или попробуйте один из следующих примеров:",
    results_title: "Результаты:",
    references_title: "Ссылки:",
    loading: "Загрузка...",
    error_message: "Что-то пошло не так. Пожалуйста, попробуйте снова.",
    no_results: "Результаты не найдены.",
    no_description: "Описание недоступно.",
    empty_query: "Пожалуйста, введите поисковый запрос.",
    scroll_hint: "прокрутка",
};

static JA: Strings = Strings {
    placeholder: "検索語を入力",
    welcome: "WikiBrowseへようこそ！",
    description: "WikiBrowseはWikipediaに基づいたブラウザで、素早く情報を見つけるのに役立ちます。",
    example_search: "検索語を入力して始めるか、次の例を試してください:",
    results_title: "結果：",
    references_title: "参考文献：",
    loading: "読み込み中...",
    error_message: "何かがうまくいきませんでした。もう一度お試しください。",
    no_results: "結果が見つかりませんでした。",
    no_description: "説明はありません。",
    empty_query: "検索語を入力してください。",
    scroll_hint: "スクロール",
};

static DE: Strings = Strings {
    placeholder: "Geben Sie einen Suchbegriff ein",
    welcome: "Willkommen bei WikiBrowse!",
    description: "WikiBrowse ist ein Browser, der auf Wikipedia basiert und Ihnen hilft, schnell Informationen zu finden.",
    example_search: "Beginnen Sie mit der Eingabe eines Suchbegriffs oder probieren Sie einen der folgenden Beispielbegriffe:",
    results_title: "Ergebnisse:",
    references_title: "Referenzen:",
    loading: "Wird geladen...",
    error_message: "Etwas ist schief gelaufen. Bitte versuchen Sie es erneut.",
    no_results: "Keine Ergebnisse gefunden.",
    no_description: "Keine Beschreibung verfügbar.",
    empty_query: "Bitte geben Sie einen Suchbegriff ein.",
    scroll_hint: "blättern",
};

static KO: Strings = Strings {
    placeholder: "검색어를 입력하세요",
    welcome: "WikiBrowse에 오신 것을 환영합니다!",
    description: "WikiBrowse는 Wikipedia를 기반으로 한 브라우저로, 정보를 빠르게 찾는 데 도움이 됩니다.",
    example_search: "검색어를 입력하거나 다음 예시 검색어를 시도하세요:",
    results_title: "결과:",
    references_title: "참고 문헌:",
    loading: "로딩 중...",
    error_message: "문제가 발생했습니다. 다시 시도해 주세요.",
    no_results: "결과가 없습니다.",
    no_description: "설명 없음.",
    empty_query: "검색어를 입력해 주세요.",
    scroll_hint: "스크롤",
};

static FR: Strings = Strings {
    placeholder: "Entrez un terme de recherche",
    welcome: "Bienvenue sur WikiBrowse !",
    description: "WikiBrowse est un navigateur basé sur Wikipédia qui vous aide à trouver des informations rapidement.",
    example_search: "Commencez à taper un terme de recherche ou essayez l'un des exemples suivants :",
    results_title: "Résultats :",
    references_title: "Références :",
    loading: "Chargement...",
    error_message: "Quelque chose s'est mal passé. Veuillez réessayer.",
    no_results: "Aucun résultat trouvé.",
    no_description: "Aucune description disponible.",
    empty_query: "Veuillez saisir un terme de recherche.",
    scroll_hint: "défiler",
};

static IT: Strings = Strings {
    placeholder: "Inserisci un termine di ricerca",
    welcome: "Benvenuto su WikiBrowse!",
    description: "WikiBrowse è un browser basato su Wikipedia che ti aiuta a trovare informazioni rapidamente.",
    example_search: "Inizia a digitare un termine di ricerca o prova uno dei seguenti esempi:",
    results_title: "Risultati:",
    references_title: "Riferimenti:",
    loading: "Caricamento in corso...",
    error_message: "Qualcosa è andato storto. Riprova.",
    no_results: "Nessun risultato trovato.",
    no_description: "Nessuna descrizione disponibile.",
    empty_query: "Inserisci un termine di ricerca.",
    scroll_hint: "scorri",
};

static PL: Strings = Strings {
    placeholder: "Wprowadź termin wyszukiwania",
    welcome: "Witaj w WikiBrowse!",
    description: "WikiBrowse to przeglądarka oparta na Wikipedii, która pomaga szybko znaleźć informacje.",
    example_search: "Zacznij wpisywać termin wyszukiwania lub wypróbuj jeden z poniższych przykładów:",
    results_title: "Wyniki:",
    references_title: "Przypisy:",
    loading: "Ładowanie...",
    error_message: "Coś poszło nie tak. Spróbuj ponownie.",
    no_results: "Brak wyników.",
    no_description: "Brak opisu.",
    empty_query: "Wprowadź termin wyszukiwania.",
    scroll_hint: "przewiń",
};

static UK: Strings = Strings {
    placeholder: "Введіть пошуковий запит",
    welcome: "Ласкаво просимо до WikiBrowse!",
    description: "WikiBrowse — це браузер, заснований на Wikipedia, який допомагає швидко знаходити інформацію.",
    example_search: "Почніть вводити пошуковий запит або спробуйте один з наступних прикладів:",
    results_title: "Результати:",
    references_title: "Посилання:",
    loading: "Завантаження...",
    error_message: "Щось пішло не так. Спробуйте ще раз.",
    no_results: "Результати не знайдено.",
    no_description: "Опис недоступний.",
    empty_query: "Будь ласка, введіть пошуковий запит.",
    scroll_hint: "прокрутка",
};

static RO: Strings = Strings {
    placeholder: "Introduceți un termen de căutare",
    welcome: "Bine ați venit pe WikiBrowse!",
    description: "WikiBrowse este un browser bazat pe Wikipedia care vă ajută să găsiți rapid informații.",
    example_search: "Începeți să tastați un termen de căutare sau încercați unul dintre următoarele exemple:",
    results_title: "Rezultate:",
    references_title: "Referințe:",
    loading: "Se încarcă...",
    error_message: "Ceva a mers greșit. Vă rugăm să încercați din nou.",
    no_results: "Nu au fost găsite rezultate.",
    no_description: "Nu există descriere.",
    empty_query: "Vă rugăm să introduceți un termen de căutare.",
    scroll_hint: "derulare",
};

static TR: Strings = Strings {
    placeholder: "Bir arama terimi girin",
    welcome: "WikiBrowse'a hoş geldiniz!",
    description: "WikiBrowse, Wikipedia'ya dayalı bir tarayıcıdır ve hızlı bir şekilde bilgi bulmanıza yardımcı olur.",
    example_search: "Bir arama terimi yazmaya başlayın veya aşağıdaki örnek arama terimlerinden birini deneyin:",
    results_title: "Sonuçlar:",
    references_title: "Kaynaklar:",
    loading: "Yükleniyor...",
    error_message: "Bir şeyler ters gitti. Lütfen tekrar deneyin.",
    no_results: "Sonuç bulunamadı.",
    no_description: "Açıklama yok.",
    empty_query: "Lütfen bir arama terimi girin.",
    scroll_hint: "kaydır",
};

static FA: Strings = Strings {
    placeholder: "یک عبارت جستجو وارد کنید",
    welcome: "به WikiBrowse خوش آمدید!",
    description: "WikiBrowse یک مرورگر مبتنی بر Wikipedia است که به شما کمک می‌کند سریعاً اطلاعات پیدا کنید.",
    example_search: "با وارد کردن یک عبارت جستجو شروع کنید یا یکی از این مثال‌های جستجو را امتحان کنید:",
    results_title: "نتایج:",
    references_title: "منابع:",
    loading: "در حال بارگذاری...",
    error_message: "چیزی اشتباه پیش رفت. لطفاً دوباره تلاش کنید.",
    no_results: "هیچ نتیجه‌ای یافت نشد.",
    no_description: "توضیحی موجود نیست.",
    empty_query: "لطفاً یک عبارت جستجو وارد کنید.",
    scroll_hint: "پیمایش",
};

static SV: Strings = Strings {
    placeholder: "Ange en sökterm",
    welcome: "Välkommen till WikiBrowse!",
    description: "WikiBrowse är en webbläsare baserad på Wikipedia som hjälper dig att hitta information snabbt.",
    example_search: "Börja skriva en sökterm eller prova en av de här exempeltermerna:",
    results_title: "Resultat:",
    references_title: "Referenser:",
    loading: "Laddar...",
    error_message: "Något gick fel. Vänligen försök igen.",
    no_results: "Inga resultat hittades.",
    no_description: "Ingen beskrivning tillgänglig.",
    empty_query: "Ange en sökterm.",
    scroll_hint: "rulla",
};

static FI: Strings = Strings {
    placeholder: "Syötä hakusana",
    welcome: "Tervetuloa WikiBrowseen!",
    description: "WikiBrowse on Wikipediaan perustuva selain, joka auttaa sinua löytämään tietoa nopeasti.",
    example_search: "Aloita kirjoittamalla hakusana tai kokeile yhtä seuraavista esimerkeistä:",
    results_title: "Tulokset:",
    references_title: "Lähteet:",
    loading: "Ladataan...",
    error_message: "Jokin meni pieleen. Yritä uudelleen.",
    no_results: "Ei tuloksia.",
    no_description: "Ei kuvausta.",
    empty_query: "Syötä hakusana.",
    scroll_hint: "vieritä",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_complete_strings() {
        for lang in Language::all() {
            let s = strings(*lang);
            for value in [
                s.placeholder,
                s.welcome,
                s.description,
                s.example_search,
                s.results_title,
                s.references_title,
                s.loading,
                s.error_message,
                s.no_results,
                s.no_description,
                s.empty_query,
                s.scroll_hint,
            ] {
                assert!(!value.trim().is_empty(), "empty string for {lang}");
            }
        }
    }

    #[test]
    fn test_languages_do_not_share_tables() {
        assert_ne!(strings(Language::En), strings(Language::Fr));
        assert_eq!(strings(Language::Fr).no_results, "Aucun résultat trouvé.");
    }
}
